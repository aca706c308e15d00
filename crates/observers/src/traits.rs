//! Capability traits for observers.
//!
//! These traits abstract over event and action types so observers can be
//! written once and reused, including against test fixtures.
//!
//! # Event traits
//!
//! - [`HasTime`] — events stamped with a simulated time
//! - [`HasEnergyDrift`] — events that carry an energy drift
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pendula_core::Observer;
//! use pendula_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops once simulated time passes a deadline.
//! struct Deadline(f64);
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() > self.0).then(A::stop_early)
//!     }
//! }
//! ```

use pendula::{Action, Event};

/// An event stamped with a simulated time.
pub trait HasTime {
    /// Returns the simulated time, in seconds.
    fn time(&self) -> f64;
}

/// An event that carries an energy drift.
pub trait HasEnergyDrift {
    /// Returns the percent change of total energy since the start.
    fn drift_percent(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the integration early.
    fn stop_early() -> Self;
}

impl HasTime for Event<'_> {
    fn time(&self) -> f64 {
        Event::time(self)
    }
}

impl HasEnergyDrift for Event<'_> {
    fn drift_percent(&self) -> f64 {
        Event::drift_percent(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
