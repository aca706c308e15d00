/// Indicates how an observed update terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The clock reached or passed the requested target time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}
