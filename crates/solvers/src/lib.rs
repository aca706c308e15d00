//! Fixed-step strategies for advancing an ODE state by one increment.
//!
//! Two strategies are provided, [`Euler`] and [`Rk4`], both implementing
//! [`StepStrategy`]. [`Method`] is a tag naming one of them; it implements
//! [`StepStrategy`] too, so callers can pick a scheme from configuration
//! without changing the code that steps.
//!
//! # Example
//!
//! ```
//! use pendula_solvers::{Method, StepStrategy};
//!
//! // y' = -y
//! let decay = |y: &f64| -y;
//!
//! let next = Method::Rk4.step(&decay, &1.0_f64, 0.1);
//! assert!((next - (-0.1_f64).exp()).abs() < 1e-6);
//! ```

pub mod step;

pub use step::{Euler, Method, ParseMethodError, Rk4, StepStrategy};
