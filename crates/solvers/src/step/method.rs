use std::{fmt, str::FromStr};

use pendula_core::{DerivativeOf, OdeSystem, StepIntegrable};

use super::{Euler, ParseMethodError, Rk4, StepStrategy};

/// Names one of the available step strategies.
///
/// `Method` is itself a [`StepStrategy`] that delegates to the named scheme,
/// so an integrator can hold one and switch schemes through configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Explicit Euler, see [`Euler`].
    Euler,

    /// Classical Runge–Kutta, see [`Rk4`].
    #[default]
    Rk4,
}

impl StepStrategy for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::Rk4 => Rk4.name(),
        }
    }

    fn step<S, F>(&self, system: &F, state: &S, h: f64) -> S
    where
        S: StepIntegrable<f64>,
        DerivativeOf<S, f64>: Clone,
        F: OdeSystem<S, f64>,
    {
        match self {
            Method::Euler => Euler.step(system, state, h),
            Method::Rk4 => Rk4.step(system, state, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk4" => Ok(Method::Rk4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}
