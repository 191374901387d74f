/// Errors when configuring a poller
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PollerError {
    /// Intervals must be finite and greater than zero
    #[error("Interval must be greater than 0 seconds, got {0}")]
    InvalidInterval(f64),
}
