//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that step strategies, models,
//! and observers build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`OdeSystem`] — maps a state to its derivative
//! - [`Observer`] — receives integration events and optionally returns actions
//! - [`constraint`] — construction-time numeric invariants such as
//!   [`StrictlyPositive`](constraint::StrictlyPositive)

pub mod constraint;

mod observer;
mod step;
mod system;

pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
pub use system::OdeSystem;
