//! The [`StepStrategy`] capability and its implementations.

mod error;
mod euler;
mod method;
mod rk4;

pub use error::ParseMethodError;
pub use euler::Euler;
pub use method::Method;
pub use rk4::Rk4;

use pendula_core::{DerivativeOf, OdeSystem, StepIntegrable};

/// Advances a state by one fixed step using some finite-difference scheme.
///
/// A strategy knows nothing about the system it integrates: the derivative is
/// supplied as an [`OdeSystem`] and the state is only touched through
/// [`StepIntegrable`].
pub trait StepStrategy {
    /// A short human-readable name for the scheme.
    fn name(&self) -> &'static str;

    /// Returns the state one step of size `h` after `state`.
    fn step<S, F>(&self, system: &F, state: &S, h: f64) -> S
    where
        S: StepIntegrable<f64>,
        DerivativeOf<S, f64>: Clone,
        F: OdeSystem<S, f64>;
}
