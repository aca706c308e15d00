use crate::{DerivativeOf, StepIntegrable};

/// A system of ordinary differential equations in autonomous form.
///
/// Maps a state `y` to its derivative `dy`. Step strategies take the system
/// as a capability rather than knowing the physics, so the same strategy can
/// integrate a double pendulum, a harmonic oscillator, or a test fixture.
///
/// Implementations must be pure: evaluating the same state twice yields the
/// same derivative. Non-finite results are returned as-is; callers observe
/// them in the stepped state.
///
/// Closures of the form `Fn(&S) -> DerivativeOf<S, Delta>` implement this
/// trait automatically.
pub trait OdeSystem<S, Delta>
where
    S: StepIntegrable<Delta>,
{
    /// Computes the derivative of `state`.
    fn derivative(&self, state: &S) -> DerivativeOf<S, Delta>;
}

impl<S, Delta, F> OdeSystem<S, Delta> for F
where
    S: StepIntegrable<Delta>,
    F: Fn(&S) -> DerivativeOf<S, Delta>,
{
    fn derivative(&self, state: &S) -> DerivativeOf<S, Delta> {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate<S, F>(system: &F, state: &S) -> DerivativeOf<S, f64>
    where
        S: StepIntegrable<f64>,
        F: OdeSystem<S, f64>,
    {
        system.derivative(state)
    }

    #[test]
    fn closures_are_systems() {
        let decay = |y: &f64| -0.5 * y;
        assert_eq!(evaluate(&decay, &4.0), -2.0);
    }

    #[test]
    fn array_systems() {
        // Harmonic oscillator: x' = v, v' = -x.
        let oscillator = |y: &[f64; 2]| [y[1], -y[0]];
        assert_eq!(evaluate(&oscillator, &[1.0, 2.0]), [2.0, -1.0]);
    }
}
