use crate::{Energy, Params, Positions, State, energy::drift_percent};

/// Event emitted after every integration step.
///
/// Energy and positions are computed on demand, so observers that only look
/// at the state pay nothing extra.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    step: u64,
    time: f64,
    state: State,
    params: &'a Params,
    initial_energy: Energy,
}

impl<'a> Event<'a> {
    pub(crate) fn new(
        step: u64,
        time: f64,
        state: State,
        params: &'a Params,
        initial_energy: Energy,
    ) -> Self {
        Self {
            step,
            time,
            state,
            params,
            initial_energy,
        }
    }

    /// Total number of steps taken since construction, including this one.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Simulated time after this step, in seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The state after this step.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        self.params
    }

    /// Mechanical energy after this step.
    #[must_use]
    pub fn energy(&self) -> Energy {
        Energy::of(&self.state, self.params)
    }

    /// Mechanical energy at construction.
    #[must_use]
    pub fn initial_energy(&self) -> Energy {
        self.initial_energy
    }

    /// Percent change of total energy since construction.
    #[must_use]
    pub fn drift_percent(&self) -> f64 {
        drift_percent(self.energy().total(), self.initial_energy.total())
    }

    /// Bob positions after this step.
    #[must_use]
    pub fn positions(&self) -> Positions {
        Positions::of(&self.state, self.params)
    }
}
