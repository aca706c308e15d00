use pendula_core::StepIntegrable;

use crate::BobSpec;

/// Instantaneous configuration of the double pendulum.
///
/// Angles are measured from the downward vertical and are never wrapped into
/// `[0, 2π)`: wrapping would make an angle jump by 2π while its angular
/// velocity stays continuous.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

/// The time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateRate {
    pub dtheta1: f64,
    pub domega1: f64,
    pub dtheta2: f64,
    pub domega2: f64,
}

impl State {
    /// Builds the initial state from the two bob specs.
    #[must_use]
    pub fn from_bobs(upper: &BobSpec, lower: &BobSpec) -> Self {
        Self {
            theta1: upper.theta0,
            omega1: upper.omega0,
            theta2: lower.theta0,
            omega2: lower.omega0,
        }
    }

    /// Builds a state from `[θ1, ω1, θ2, ω2]`.
    #[must_use]
    pub fn from_array([theta1, omega1, theta2, omega2]: [f64; 4]) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    /// Returns the state as `[θ1, ω1, θ2, ω2]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.theta1, self.omega1, self.theta2, self.omega2]
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl StateRate {
    /// Returns the rate as `[dθ1, dω1, dθ2, dω2]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.dtheta1, self.domega1, self.dtheta2, self.domega2]
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = StateRate;

    fn step(&self, rate: StateRate, dt: f64) -> Self {
        Self {
            theta1: self.theta1 + rate.dtheta1 * dt,
            omega1: self.omega1 + rate.domega1 * dt,
            theta2: self.theta2 + rate.dtheta2 * dt,
            omega2: self.omega2 + rate.domega2 * dt,
        }
    }
}
