//! A headless driver that advances several pendula on a shared clock.
//!
//! A display layer calls [`Session::tick`] from its frame timer and then reads
//! each pendulum back for drawing. The session never touches rendering itself.

use log::debug;
use pendula_core::constraint::StrictlyPositive;
use uom::si::{f64::Time, time::second};

use crate::{DoublePendulum, EnergyReport, Error};

/// Runs a set of named pendula against one simulated clock.
///
/// Every tick moves the clock forward by a fixed amount and asks each
/// pendulum that has fallen behind to catch up. Because pendula overshoot to
/// their next step boundary, a pendulum can end up slightly ahead of the
/// clock; it is left alone until the clock passes it again.
#[derive(Debug, Clone)]
pub struct Session {
    tick: f64,
    ticks: u64,
    paused: bool,
    pendula: Vec<(String, DoublePendulum)>,
}

impl Session {
    /// The default tick, one frame at 60 Hz.
    pub const DEFAULT_TICK_SECONDS: f64 = 1.0 / 60.0;

    /// Creates an empty session whose clock advances by `tick` per call to
    /// [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTick`] if `tick` is not strictly positive and
    /// finite.
    pub fn new(tick: Time) -> Result<Self, Error> {
        let value = tick.get::<second>();
        let tick = StrictlyPositive::new(value)
            .map_err(|source| Error::InvalidTick { value, source })?
            .into_inner();

        Ok(Self {
            tick,
            ticks: 0,
            paused: false,
            pendula: Vec::new(),
        })
    }

    /// Adds a pendulum under `name`, returning any pendulum it replaced.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        pendulum: DoublePendulum,
    ) -> Option<DoublePendulum> {
        let name = name.into();
        match self.pendula.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, pendulum)),
            None => {
                self.pendula.push((name, pendulum));
                None
            }
        }
    }

    /// Returns the pendulum registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DoublePendulum> {
        self.pendula
            .iter()
            .find_map(|(n, p)| (n == name).then_some(p))
    }

    /// Iterates over all pendula in insertion order.
    pub fn pendula(&self) -> impl Iterator<Item = (&str, &DoublePendulum)> {
        self.pendula.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Advances the clock by one tick and brings every lagging pendulum up
    /// to it. Does nothing while paused.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a pendulum update.
    pub fn tick(&mut self) -> Result<(), Error> {
        if self.paused {
            return Ok(());
        }

        self.ticks += 1;
        let now = self.time();

        for (_, pendulum) in &mut self.pendula {
            if now > pendulum.time() {
                pendulum.update(now)?;
            }
        }

        Ok(())
    }

    /// Simulated time on the session clock, in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self) -> f64 {
        self.ticks as f64 * self.tick
    }

    /// Simulated time on the session clock.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        Time::new::<second>(self.time())
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        debug!("session paused at t={}", self.time());
        self.paused = true;
    }

    pub fn resume(&mut self) {
        debug!("session resumed at t={}", self.time());
        self.paused = false;
    }

    /// Flips between paused and running.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Energy summaries for every pendulum, in insertion order.
    #[must_use]
    pub fn energy_reports(&self) -> Vec<(&str, EnergyReport)> {
        self.pendula()
            .map(|(name, p)| (name, p.energy_report()))
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tick: Self::DEFAULT_TICK_SECONDS,
            ticks: 0,
            paused: false,
            pendula: Vec::new(),
        }
    }
}
