use pendula_core::{DerivativeOf, OdeSystem, StepIntegrable};

use super::StepStrategy;

/// Classical fourth-order Runge–Kutta.
///
/// ```text
/// k1 = h * f(y)
/// k2 = h * f(y + k1/2)
/// k3 = h * f(y + k2/2)
/// k4 = h * f(y + k3)
/// y_next = y + k1/6 + k2/3 + k3/3 + k4/6
/// ```
///
/// Fourth-order accurate with a local truncation error of `O(h⁵)`, at the
/// cost of four derivative evaluations per step. This is the default scheme.
///
/// Since the state is only reachable through [`StepIntegrable`], the stages
/// are carried as derivatives `d_i = k_i / h` and the final combination is
/// applied as four successive steps of `h/6`, `h/3`, `h/3`, `h/6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl StepStrategy for Rk4 {
    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }

    fn step<S, F>(&self, system: &F, state: &S, h: f64) -> S
    where
        S: StepIntegrable<f64>,
        DerivativeOf<S, f64>: Clone,
        F: OdeSystem<S, f64>,
    {
        let half = 0.5 * h;

        let d1 = system.derivative(state);
        let d2 = system.derivative(&state.step(d1.clone(), half));
        let d3 = system.derivative(&state.step(d2.clone(), half));
        let d4 = system.derivative(&state.step(d3.clone(), h));

        state
            .step(d1, h / 6.0)
            .step(d2, h / 3.0)
            .step(d3, h / 3.0)
            .step(d4, h / 6.0)
    }
}
