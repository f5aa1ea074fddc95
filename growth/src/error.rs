// error.rs - Error types for the growth crate

/// Errors surfaced to the host when a control input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The requested tick interval is below the allowed minimum.
    #[error("interval must be at least {minimum_ms} milliseconds (got {requested_ms})")]
    IntervalTooShort {
        /// Value the host asked for.
        requested_ms: u64,
        /// Smallest accepted value.
        minimum_ms: u64,
    },
}
