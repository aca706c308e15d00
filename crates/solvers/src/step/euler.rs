use pendula_core::{DerivativeOf, OdeSystem, StepIntegrable};

use super::StepStrategy;

/// Explicit (forward) Euler.
///
/// ```text
/// y_{n+1} = y_n + h * f(y_n)
/// ```
///
/// First-order accurate with a local truncation error of `O(h²)`. Cheap, but
/// it steadily pumps energy into an undamped oscillator, which makes it a
/// useful baseline for showing integration error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl StepStrategy for Euler {
    fn name(&self) -> &'static str {
        "Euler"
    }

    fn step<S, F>(&self, system: &F, state: &S, h: f64) -> S
    where
        S: StepIntegrable<f64>,
        DerivativeOf<S, f64>: Clone,
        F: OdeSystem<S, f64>,
    {
        state.step(system.derivative(state), h)
    }
}
