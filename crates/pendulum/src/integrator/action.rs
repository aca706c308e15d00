/// Control actions an observer can return during integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step, leaving the clock short of the target.
    StopEarly,
}
