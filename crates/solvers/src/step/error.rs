use thiserror::Error;

/// Returned when a string names no known step method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step method `{0}`, expected `euler` or `rk4`")]
pub struct ParseMethodError(pub String);
