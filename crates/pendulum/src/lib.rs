//! Fixed-step simulation of an undamped double pendulum.
//!
//! Two point masses hang from rigid, massless rods and swing under gravity.
//! [`DoublePendulum`] advances the four-dimensional state `(θ1, ω1, θ2, ω2)`
//! with a configurable step strategy ([`Method::Euler`] or [`Method::Rk4`])
//! and tracks mechanical energy so numerical drift can be reported.
//!
//! - [`BobSpec`], [`Config`] — what to simulate and how
//! - [`DoublePendulum`] — the integrator; call [`update`] with a target time
//! - [`Params`] — the equations of motion, usable as an
//!   [`OdeSystem`](pendula_core::OdeSystem) on its own
//! - [`Energy`], [`EnergyReport`] — energy diagnostics
//! - [`Session`] — drives several pendula from a fixed frame clock
//!
//! [`update`]: DoublePendulum::update

mod bob;
mod config;
mod energy;
mod error;
mod geometry;
mod params;
mod state;

pub mod integrator;
pub mod session;

pub use bob::{Bob, BobSpec};
pub use config::Config;
pub use energy::{Energy, EnergyReport, drift_percent};
pub use error::Error;
pub use geometry::{Point, Positions};
pub use integrator::{Action, DoublePendulum, Event, Status};
pub use params::Params;
pub use session::Session;
pub use state::{State, StateRate};

pub use pendula_solvers::{Method, StepStrategy};
