use pendula_core::{
    OdeSystem,
    constraint::{Constrained, StrictlyPositive},
};

use crate::{Bob, BobSpec, Error, State, StateRate};

type Positive = Constrained<f64, StrictlyPositive>;

/// Physical parameters of the double pendulum.
///
/// Lengths and masses are guaranteed finite and strictly positive; gravity is
/// guaranteed finite. `Params` is the pendulum's [`OdeSystem`]: it maps a
/// [`State`] to its [`StateRate`] through the closed-form Lagrangian
/// equations of motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    length1: Positive,
    mass1: Positive,
    length2: Positive,
    mass2: Positive,
    gravity: f64,
}

impl Params {
    /// Validates and collects the physical parameters of both bobs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] or [`Error::InvalidMass`] if a length
    /// or mass is not strictly positive and finite, and
    /// [`Error::InvalidGravity`] if `gravity` is not finite.
    pub fn new(upper: &BobSpec, lower: &BobSpec, gravity: f64) -> Result<Self, Error> {
        if !gravity.is_finite() {
            return Err(Error::InvalidGravity(gravity));
        }

        Ok(Self {
            length1: length(Bob::Upper, upper.length)?,
            mass1: mass(Bob::Upper, upper.mass)?,
            length2: length(Bob::Lower, lower.length)?,
            mass2: mass(Bob::Lower, lower.mass)?,
            gravity,
        })
    }

    #[must_use]
    pub fn length1(&self) -> f64 {
        self.length1.get()
    }

    #[must_use]
    pub fn mass1(&self) -> f64 {
        self.mass1.get()
    }

    #[must_use]
    pub fn length2(&self) -> f64 {
        self.length2.get()
    }

    #[must_use]
    pub fn mass2(&self) -> f64 {
        self.mass2.get()
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

fn length(bob: Bob, value: f64) -> Result<Positive, Error> {
    Positive::new(value).map_err(|source| Error::InvalidLength { bob, value, source })
}

fn mass(bob: Bob, value: f64) -> Result<Positive, Error> {
    Positive::new(value).map_err(|source| Error::InvalidMass { bob, value, source })
}

impl OdeSystem<State, f64> for Params {
    /// Equations of motion for the coupled double pendulum.
    ///
    /// With `Δ = θ2 − θ1` and `M = m1 + m2`:
    ///
    /// ```text
    /// dω1/dt = (m2·l1·ω1²·sinΔ·cosΔ + m2·g·sinθ2·cosΔ + m2·l2·ω2²·sinΔ − M·g·sinθ1) / den1
    /// dω2/dt = (−m2·l2·ω2²·sinΔ·cosΔ + M·g·sinθ1·cosΔ − M·l1·ω1²·sinΔ − M·g·sinθ2) / den2
    ///
    /// den1 = M·l1 − m2·l1·cos²Δ
    /// den2 = den1 · l2 / l1
    /// ```
    ///
    /// A vanishing denominator yields non-finite rates rather than a panic.
    fn derivative(&self, state: &State) -> StateRate {
        let State {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;

        let (l1, m1, l2, m2, g) = (
            self.length1(),
            self.mass1(),
            self.length2(),
            self.mass2(),
            self.gravity,
        );

        let (sin_d, cos_d) = (theta2 - theta1).sin_cos();
        let big_m = m1 + m2;
        let (sin1, sin2) = (theta1.sin(), theta2.sin());

        let den1 = big_m * l1 - m2 * l1 * cos_d * cos_d;
        let domega1 = (m2 * l1 * omega1 * omega1 * sin_d * cos_d
            + m2 * g * sin2 * cos_d
            + m2 * l2 * omega2 * omega2 * sin_d
            - big_m * g * sin1)
            / den1;

        let den2 = den1 * (l2 / l1);
        let domega2 = (-m2 * l2 * omega2 * omega2 * sin_d * cos_d
            + big_m * g * sin1 * cos_d
            - big_m * l1 * omega1 * omega1 * sin_d
            - big_m * g * sin2)
            / den2;

        StateRate {
            dtheta1: omega1,
            domega1,
            dtheta2: omega2,
            domega2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use pendula_core::constraint::ConstraintError;

    fn params() -> Params {
        Params::new(
            &BobSpec::new(0.0, 0.0, 1.0, 1.0),
            &BobSpec::new(0.0, 0.0, 0.65, 0.3),
            9.81,
        )
        .unwrap()
    }

    #[test]
    fn accessors_return_validated_values() {
        let p = params();
        assert_eq!(p.length1(), 1.0);
        assert_eq!(p.mass1(), 1.0);
        assert_eq!(p.length2(), 0.65);
        assert_eq!(p.mass2(), 0.3);
        assert_eq!(p.gravity(), 9.81);
    }

    #[test]
    fn rejects_non_positive_lengths_and_masses() {
        let good = BobSpec::new(0.0, 0.0, 1.0, 1.0);

        let err = Params::new(&BobSpec::new(0.0, 0.0, 0.0, 1.0), &good, 9.81).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                bob: Bob::Upper,
                value: 0.0,
                source: ConstraintError::Zero,
            }
        );

        let err = Params::new(&good, &BobSpec::new(0.0, 0.0, 1.0, -2.0), 9.81).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMass {
                bob: Bob::Lower,
                value: -2.0,
                source: ConstraintError::Negative,
            }
        );

        let err = Params::new(&good, &BobSpec::new(0.0, 0.0, f64::NAN, 1.0), 9.81).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                bob: Bob::Lower,
                source: ConstraintError::NotANumber,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_gravity() {
        let bob = BobSpec::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            Params::new(&bob, &bob, f64::INFINITY),
            Err(Error::InvalidGravity(f64::INFINITY))
        );
    }

    #[test]
    fn hanging_at_rest_stays_at_rest() {
        let rate = params().derivative(&State::default());
        assert_eq!(rate, StateRate::default());
    }

    #[test]
    fn angle_rates_are_angular_velocities() {
        let state = State::from_array([0.3, -1.5, 2.0, 0.75]);
        let rate = params().derivative(&state);

        assert_eq!(rate.dtheta1, -1.5);
        assert_eq!(rate.dtheta2, 0.75);
    }

    #[test]
    fn aligned_rods_at_rest_swing_like_a_simple_pendulum() {
        // With θ1 = θ2 and no motion the rods act as one rigid arm at the
        // upper joint: dω1 = −g·sinθ/l1 and the lower joint feels no torque.
        let theta = 0.4_f64;
        let p = params();

        let rate = p.derivative(&State::from_array([theta, 0.0, theta, 0.0]));

        let expected = -p.gravity() * theta.sin() / p.length1();
        assert_relative_eq!(rate.domega1, expected, max_relative = 1e-12);
        assert_relative_eq!(rate.domega2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn light_lower_bob_decouples() {
        let p = Params::new(
            &BobSpec::new(0.0, 0.0, 2.0, 1.0),
            &BobSpec::new(0.0, 0.0, 0.5, 1e-12),
            9.81,
        )
        .unwrap();

        let state = State::from_array([0.7, 1.2, -0.4, 3.0]);
        let rate = p.derivative(&state);

        let expected = -9.81 * 0.7_f64.sin() / 2.0;
        assert_relative_eq!(rate.domega1, expected, max_relative = 1e-9);
    }

    #[test]
    fn non_finite_input_propagates() {
        let rate = params().derivative(&State::from_array([f64::NAN, 0.0, 0.0, 0.0]));

        assert!(rate.dtheta1.is_finite());
        assert!(rate.domega1.is_nan());
        assert!(rate.domega2.is_nan());
    }
}
