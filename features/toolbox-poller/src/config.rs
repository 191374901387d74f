use serde::Deserialize;

/// Settings of an [IntervalPoller](crate::poller::IntervalPoller)
///
/// Plain data, so it can be deserialized from a settings file and provided through a
/// `TypeRegistry` like any other dependency.
///
/// ```json
/// { "interval_secs": 30, "fire_immediately": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PollerConfig {
    /// Seconds between two ticks, must be greater than zero
    pub interval_secs: f64,
    /// Emit a tick as soon as the poller starts
    #[serde(default)]
    pub fire_immediately: bool,
}
