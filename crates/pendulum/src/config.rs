use pendula_solvers::Method;

/// Integration settings shared by both bobs.
///
/// Construct with [`Config::default`] and chain builder methods as needed.
/// Values are validated when the pendulum is built, not here.
///
/// # Example
///
/// ```
/// use pendula::{Config, Method};
///
/// let config = Config::default().step_size(0.001).method(Method::Euler);
/// assert_eq!(config.gravity, 9.81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Fixed integration step, in seconds.
    pub step_size: f64,
    /// Gravitational acceleration, in m/s².
    pub gravity: f64,
    /// The step strategy.
    pub method: Method,
}

impl Config {
    /// Default step size, in seconds.
    pub const DEFAULT_STEP_SIZE: f64 = 0.005;

    /// Standard gravity, in m/s².
    pub const DEFAULT_GRAVITY: f64 = 9.81;

    /// Sets the step size.
    #[must_use]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the gravitational acceleration.
    #[must_use]
    pub fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the step strategy.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: Self::DEFAULT_STEP_SIZE,
            gravity: Self::DEFAULT_GRAVITY,
            method: Method::default(),
        }
    }
}
