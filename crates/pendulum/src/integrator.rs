//! The double pendulum integrator.
//!
//! [`DoublePendulum`] owns the state and parameters of one pendulum and
//! advances it at a fixed step size with the configured [`Method`]:
//!
//! ```text
//! do {
//!     state = method.step(params, state, h)
//!     steps += 1
//! } while steps * h < target
//! ```
//!
//! The loop always runs at least once, so asking for the current time still
//! moves the clock forward by one full step.
//!
//! # Example
//!
//! ```
//! use pendula::{BobSpec, Config, DoublePendulum};
//!
//! let upper = BobSpec::new(1.0, 0.0, 1.0, 1.0);
//! let lower = BobSpec::new(0.6, 0.0, 0.65, 0.3);
//! let mut pendulum = DoublePendulum::new(upper, lower, Config::default())?;
//!
//! pendulum.update(1.0)?;
//!
//! assert!(pendulum.time() >= 1.0);
//! assert!(pendulum.energy_drift().abs() < 0.01);
//! # Ok::<(), pendula::Error>(())
//! ```

mod action;
mod event;
mod status;

pub use action::Action;
pub use event::Event;
pub use status::Status;

use log::{debug, trace, warn};
use pendula_core::{
    Observer,
    constraint::{Constrained, StrictlyPositive},
};
use pendula_solvers::{Method, StepStrategy};

use crate::{
    BobSpec, Config, Energy, EnergyReport, Error, Params, Positions, State,
    energy::drift_percent,
};

/// A double pendulum advanced by a fixed-step integrator.
///
/// Each instance exclusively owns its state, so independent pendula can be
/// stepped on separate threads without synchronization.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    state: State,
    params: Params,
    step_size: Constrained<f64, StrictlyPositive>,
    method: Method,
    steps: u64,
    initial_energy: Energy,
    reported_non_finite: bool,
}

impl DoublePendulum {
    /// Builds a pendulum at `t = 0` from its two bobs.
    ///
    /// The initial energy is computed here and kept for drift reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if a length, mass, or the step size is not strictly
    /// positive and finite, or if gravity is not finite.
    pub fn new(upper: BobSpec, lower: BobSpec, config: Config) -> Result<Self, Error> {
        let params = Params::new(&upper, &lower, config.gravity)?;
        let step_size =
            Constrained::new(config.step_size).map_err(|source| Error::InvalidStepSize {
                value: config.step_size,
                source,
            })?;

        let state = State::from_bobs(&upper, &lower);
        let initial_energy = Energy::of(&state, &params);

        debug!(
            "new double pendulum: method={}, step_size={}, gravity={}, initial_energy={}",
            config.method,
            config.step_size,
            config.gravity,
            initial_energy.total()
        );

        Ok(Self {
            state,
            params,
            step_size,
            method: config.method,
            steps: 0,
            initial_energy,
            reported_non_finite: false,
        })
    }

    /// Advances the pendulum until its clock reaches or passes `target`.
    ///
    /// At least one step is always taken, even when `target` equals the
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackwardTime`] if `target` is before the current time
    /// and [`Error::InvalidTargetTime`] if it is not finite. The state is left
    /// untouched in both cases.
    pub fn update(&mut self, target: f64) -> Result<(), Error> {
        self.update_observed(target, ()).map(|_| ())
    }

    /// Advances the pendulum like [`update`](Self::update), reporting each step.
    ///
    /// The observer receives an [`Event`] after every step and may return
    /// [`Action::StopEarly`] to end the update before `target` is reached.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn update_observed<Obs>(&mut self, target: f64, mut observer: Obs) -> Result<Status, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        if !target.is_finite() {
            return Err(Error::InvalidTargetTime(target));
        }
        let current = self.time();
        if target < current {
            return Err(Error::BackwardTime { current, target });
        }

        let h = self.step_size();
        let first_step = self.steps;

        let status = loop {
            self.state = self.method.step(&self.params, &self.state, h);
            self.steps += 1;
            self.check_finite();

            let event = Event::new(
                self.steps,
                self.time(),
                self.state,
                &self.params,
                self.initial_energy,
            );
            if let Some(Action::StopEarly) = observer.observe(&event) {
                break Status::StoppedByObserver;
            }

            if self.time() >= target {
                break Status::Complete;
            }
        };

        trace!(
            "advanced {} steps to t={} (target {target}, {status:?})",
            self.steps - first_step,
            self.time(),
        );

        Ok(status)
    }

    fn check_finite(&mut self) {
        if !self.reported_non_finite && !self.state.is_finite() {
            self.reported_non_finite = true;
            warn!(
                "state became non-finite at t={} after {} steps: {:?}",
                self.time(),
                self.steps,
                self.state
            );
        }
    }

    /// Angle of the upper rod from vertical, in radians.
    #[must_use]
    pub fn theta1(&self) -> f64 {
        self.state.theta1
    }

    /// Angular velocity of the upper rod, in rad/s.
    #[must_use]
    pub fn omega1(&self) -> f64 {
        self.state.omega1
    }

    /// Angle of the lower rod from vertical, in radians.
    #[must_use]
    pub fn theta2(&self) -> f64 {
        self.state.theta2
    }

    /// Angular velocity of the lower rod, in rad/s.
    #[must_use]
    pub fn omega2(&self) -> f64 {
        self.state.omega2
    }

    /// Simulated time, in seconds.
    ///
    /// Always an exact multiple of the step size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.step_size()
    }

    /// Number of steps taken since construction.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn mass1(&self) -> f64 {
        self.params.mass1()
    }

    #[must_use]
    pub fn mass2(&self) -> f64 {
        self.params.mass2()
    }

    #[must_use]
    pub fn length1(&self) -> f64 {
        self.params.length1()
    }

    #[must_use]
    pub fn length2(&self) -> f64 {
        self.params.length2()
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.params.gravity()
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size.get()
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Human-readable name of the step strategy, e.g. `"Runge Kutta (RK4)"`.
    #[must_use]
    pub fn solver_method(&self) -> &'static str {
        self.method.name()
    }

    /// Mechanical energy of the current state.
    #[must_use]
    pub fn energy(&self) -> Energy {
        Energy::of(&self.state, &self.params)
    }

    /// Mechanical energy at construction.
    #[must_use]
    pub fn initial_energy(&self) -> Energy {
        self.initial_energy
    }

    /// Percent change of total energy since construction.
    #[must_use]
    pub fn energy_drift(&self) -> f64 {
        drift_percent(self.energy().total(), self.initial_energy.total())
    }

    /// Current energy and drift, ready for display.
    #[must_use]
    pub fn energy_report(&self) -> EnergyReport {
        EnergyReport::new(self.energy(), self.initial_energy)
    }

    /// Cartesian positions of both bobs.
    #[must_use]
    pub fn positions(&self) -> Positions {
        Positions::of(&self.state, &self.params)
    }
}
