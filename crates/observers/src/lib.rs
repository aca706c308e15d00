//! Reusable observers for pendula integrations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with [`DoublePendulum::update_observed`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events and actions
//!   ([`HasTime`], [`HasEnergyDrift`], [`CanStopEarly`])
//! - [`DriftGuard`] — stops an integration once energy drift exceeds a limit
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories and energy
//!   drift via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: pendula_core::Observer
//! [`DoublePendulum::update_observed`]: pendula::DoublePendulum::update_observed
//! [`HasTime`]: traits::HasTime
//! [`HasEnergyDrift`]: traits::HasEnergyDrift
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod drift_guard;

#[cfg(feature = "plot")]
mod plot;

pub use drift_guard::DriftGuard;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
