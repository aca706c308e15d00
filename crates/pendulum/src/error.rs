use pendula_core::constraint::ConstraintError;
use thiserror::Error;

use crate::Bob;

/// Errors raised by the double pendulum and its session driver.
///
/// Numerical blow-up is not an error: non-finite values propagate into the
/// state and can be detected with [`State::is_finite`](crate::State::is_finite)
/// or through the energy drift.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid {bob} rod length {value}: {source}")]
    InvalidLength {
        bob: Bob,
        value: f64,
        source: ConstraintError,
    },

    #[error("invalid {bob} bob mass {value}: {source}")]
    InvalidMass {
        bob: Bob,
        value: f64,
        source: ConstraintError,
    },

    #[error("invalid step size {value}: {source}")]
    InvalidStepSize { value: f64, source: ConstraintError },

    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f64),

    #[error("invalid session tick {value}: {source}")]
    InvalidTick { value: f64, source: ConstraintError },

    #[error("cannot integrate backward from t={current} to t={target}")]
    BackwardTime { current: f64, target: f64 },

    #[error("target time must be finite, got {0}")]
    InvalidTargetTime(f64),
}
