use log::warn;
use pendula_core::Observer;

use crate::traits::{CanStopEarly, HasEnergyDrift, HasTime};

/// Stops an integration once the absolute energy drift exceeds a limit.
///
/// Useful for bailing out of runs whose step size is too coarse to be worth
/// finishing. The guard remembers the time at which it tripped.
///
/// # Example
///
/// ```
/// use pendula::{BobSpec, Config, DoublePendulum, Method, Status};
/// use pendula_observers::DriftGuard;
///
/// let mut pendulum = DoublePendulum::new(
///     BobSpec::new(1.0, 0.0, 1.0, 1.0),
///     BobSpec::new(0.6, 0.0, 0.65, 0.3),
///     Config::default().method(Method::Euler),
/// )?;
///
/// let mut guard = DriftGuard::new(5.0);
/// let status = pendulum.update_observed(10.0, &mut guard)?;
///
/// assert_eq!(status, Status::StoppedByObserver);
/// assert!(guard.tripped_at().is_some());
/// # Ok::<(), pendula::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftGuard {
    limit_percent: f64,
    observed: usize,
    tripped_at: Option<f64>,
}

impl DriftGuard {
    /// Creates a guard that trips when `|drift| > limit_percent`.
    ///
    /// A NaN drift also trips the guard.
    #[must_use]
    pub fn new(limit_percent: f64) -> Self {
        Self {
            limit_percent,
            observed: 0,
            tripped_at: None,
        }
    }

    /// Number of events seen so far.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Simulated time of the event that tripped the guard, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }
}

impl<E, A> Observer<E, A> for DriftGuard
where
    E: HasEnergyDrift + HasTime,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.observed += 1;

        let drift = event.drift_percent();
        if drift.abs() <= self.limit_percent {
            return None;
        }

        let time = event.time();
        warn!(
            "energy drift {drift:+.3}% exceeded {}% at t={time}",
            self.limit_percent
        );
        self.tripped_at = Some(time);
        Some(A::stop_early())
    }
}

/// Allows `&mut DriftGuard` to be passed by value so the guard can be
/// inspected after the integration returns.
impl<E, A> Observer<E, A> for &mut DriftGuard
where
    E: HasEnergyDrift + HasTime,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
