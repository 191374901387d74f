//! Toolbox Poller turns a recurring timer into a start/stop-able source of ticks.
//!
//! Any number of [Subscription]s can listen to one poller. Each receives every tick
//! emitted after it subscribed.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use toolbox_poller::{IntervalPoller, Poller, Tick};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let poller = IntervalPoller::new(Duration::from_secs(10), true);
//! let mut ticks = poller.subscribe();
//!
//! poller.start();
//! assert_eq!(ticks.try_recv(), Some(Tick));
//!
//! poller.stop();
//! # }
//! ```
//!
//! The timer runs as a Tokio task, either on the runtime `start` is called from or on
//! the one given to [IntervalPoller::with_runtime].

pub mod config;
pub mod errors;
pub mod poller;
pub mod subscription;

pub use config::PollerConfig;
pub use errors::PollerError;
pub use poller::{IntervalPoller, Poller};
pub use subscription::{Subscription, Tick};
