use std::fmt;

use crate::{Params, State};

/// Mechanical energy of the pendulum at one instant, in joules.
///
/// Potential energy is measured from the pivot, so a pendulum hanging at
/// rest has negative total energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    /// Computes the mechanical energy of `state`.
    ///
    /// ```text
    /// V = −(m1 + m2)·g·l1·cosθ1 − m2·g·l2·cosθ2
    /// T = ½·m1·l1²·ω1² + ½·m2·(l1²·ω1² + l2²·ω2² + 2·l1·l2·ω1·ω2·cos(θ1 − θ2))
    /// ```
    #[must_use]
    pub fn of(state: &State, params: &Params) -> Self {
        let (l1, m1, l2, m2, g) = (
            params.length1(),
            params.mass1(),
            params.length2(),
            params.mass2(),
            params.gravity(),
        );
        let State {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;

        let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();

        let v1_sq = l1 * l1 * omega1 * omega1;
        let v2_sq = l2 * l2 * omega2 * omega2;
        let cross = 2.0 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();
        let kinetic = 0.5 * m1 * v1_sq + 0.5 * m2 * (v1_sq + v2_sq + cross);

        Self { kinetic, potential }
    }

    /// Kinetic plus potential energy.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Percent change of `current` relative to `initial`.
///
/// Non-finite when `initial` is zero.
#[must_use]
pub fn drift_percent(current: f64, initial: f64) -> f64 {
    (current - initial) / initial * 100.0
}

/// A one-line summary of a pendulum's energy for display.
///
/// Formats as `"-12.3 J (+0.4%)"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    /// Current total energy, in joules.
    pub total: f64,
    /// Drift from the initial energy, in percent.
    pub drift_percent: f64,
}

impl EnergyReport {
    /// Builds a report comparing `current` against `initial`.
    #[must_use]
    pub fn new(current: Energy, initial: Energy) -> Self {
        Self {
            total: current.total(),
            drift_percent: drift_percent(current.total(), initial.total()),
        }
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} J ({:+.1}%)", self.total, self.drift_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::BobSpec;

    fn params() -> Params {
        Params::new(
            &BobSpec::new(0.0, 0.0, 1.0, 1.0),
            &BobSpec::new(0.0, 0.0, 0.65, 0.3),
            9.81,
        )
        .unwrap()
    }

    #[test]
    fn hanging_at_rest_is_pure_potential() {
        let energy = Energy::of(&State::default(), &params());

        assert_eq!(energy.kinetic, 0.0);
        // −(1.3)(9.81)(1.0) − (0.3)(9.81)(0.65)
        assert_relative_eq!(energy.potential, -14.66595, max_relative = 1e-12);
        assert_relative_eq!(energy.total(), energy.potential);
    }

    #[test]
    fn horizontal_rods_have_zero_potential() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        let state = State::from_array([half_pi, 0.0, -half_pi, 0.0]);

        let energy = Energy::of(&state, &params());

        assert_relative_eq!(energy.potential, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn kinetic_energy_of_rigid_rotation() {
        // Both rods aligned and spinning together: the bobs move like points
        // on a rigid arm at radii l1 and l1 + l2.
        let omega = 2.0;
        let state = State::from_array([0.3, omega, 0.3, omega]);
        let p = params();

        let energy = Energy::of(&state, &p);

        let r2 = p.length1() + p.length2();
        let expected = 0.5 * p.mass1() * (p.length1() * omega).powi(2)
            + 0.5 * p.mass2() * (r2 * omega).powi(2);
        assert_relative_eq!(energy.kinetic, expected, max_relative = 1e-12);
    }

    #[test]
    fn drift_is_relative_to_initial() {
        assert_relative_eq!(drift_percent(-9.9, -10.0), -1.0, max_relative = 1e-12);
        assert_relative_eq!(drift_percent(11.0, 10.0), 10.0, max_relative = 1e-12);
        assert!(!drift_percent(1.0, 0.0).is_finite());
    }

    #[test]
    fn report_formatting() {
        let initial = Energy {
            kinetic: 0.0,
            potential: -10.0,
        };
        let current = Energy {
            kinetic: 0.5,
            potential: -10.46,
        };

        let report = EnergyReport::new(current, initial);

        assert_eq!(report.to_string(), "-10.0 J (-0.4%)");
    }
}
