use std::{
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    config::PollerConfig,
    errors::PollerError,
    subscription::{Subscription, Tick},
};

/// Source of recurring [Tick]s that can be started and stopped
///
/// ```no_run
/// use std::time::Duration;
/// use toolbox_poller::{IntervalPoller, Poller};
///
/// # async fn run() {
/// let poller = IntervalPoller::new(Duration::from_secs(5), true);
/// let mut ticks = poller.subscribe();
/// poller.start();
///
/// while ticks.recv().await.is_some() {
///     println!("Polled!");
/// }
/// # }
/// ```
pub trait Poller: Send + Sync {
    /// Subscribes to all ticks emitted from now on
    fn subscribe(&self) -> Subscription;

    /// Starts emitting ticks
    fn start(&self);

    /// Stops emitting ticks, no tick is emitted after this returns
    ///
    /// Ticks emitted before the call stay queued in each [Subscription] until read.
    fn stop(&self);

    fn is_running(&self) -> bool;
}

/// Emits a [Tick] every `interval` while running
///
/// - `start` arms a recurring timer, the first timed tick comes one interval later.
///   With `fire_immediately` a tick is emitted right away as well.
/// - `start` on a running poller replaces the timer.
/// - `stop` cancels the timer, subscriptions stay valid for the next `start`.
/// - Dropping the poller stops it and ends all subscriptions.
///
/// Every subscription has its own unbounded queue, a slow subscriber never loses ticks.
pub struct IntervalPoller {
    interval: Duration,
    fire_immediately: bool,
    runtime: Option<Handle>,
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<PollerState>,
}

/// `timer` is set if and only if the poller is running
struct PollerState {
    timer: Option<JoinHandle<()>>,
    /// Bumped on every start and stop, a timer only emits while its generation is current
    generation: u64,
    subscribers: Vec<mpsc::UnboundedSender<Tick>>,
}

impl IntervalPoller {
    /// Creates a stopped poller
    ///
    /// # Panics
    /// If `interval` is zero
    pub fn new(interval: Duration, fire_immediately: bool) -> Self {
        match Self::try_new(interval, fire_immediately) {
            Ok(poller) => poller,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a stopped poller, rejecting a zero interval
    pub fn try_new(interval: Duration, fire_immediately: bool) -> Result<Self, PollerError> {
        if interval.is_zero() {
            return Err(PollerError::InvalidInterval(interval.as_secs_f64()));
        }

        Ok(IntervalPoller {
            interval,
            fire_immediately,
            runtime: None,
            shared: Arc::new(Shared {
                state: Mutex::new(PollerState {
                    timer: None,
                    generation: 0,
                    subscribers: Vec::new(),
                }),
            }),
        })
    }

    /// Creates a stopped poller from an interval in seconds
    ///
    /// Zero, negative and non finite intervals are rejected
    pub fn try_from_secs(secs: f64, fire_immediately: bool) -> Result<Self, PollerError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(PollerError::InvalidInterval(secs));
        }

        let interval =
            Duration::try_from_secs_f64(secs).map_err(|_| PollerError::InvalidInterval(secs))?;
        Self::try_new(interval, fire_immediately).map_err(|_| PollerError::InvalidInterval(secs))
    }

    pub fn from_config(config: &PollerConfig) -> Result<Self, PollerError> {
        Self::try_from_secs(config.interval_secs, config.fire_immediately)
    }

    /// Runs the timer on the given runtime instead of the one `start` is called from
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn fires_immediately(&self) -> bool {
        self.fire_immediately
    }

    /// Number of subscriptions that are still alive
    pub fn subscriber_count(&self) -> usize {
        let mut state = self.shared.lock();
        state.subscribers.retain(|subscriber| !subscriber.is_closed());
        state.subscribers.len()
    }
}

impl Poller for IntervalPoller {
    fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.shared.lock().subscribers.push(sender);
        Subscription::new(receiver)
    }

    /// Without a runtime from [IntervalPoller::with_runtime] this must be called inside
    /// a Tokio runtime. Otherwise the error is logged and the poller stays stopped.
    fn start(&self) {
        let runtime = match self.runtime.clone() {
            Some(runtime) => runtime,
            None => match Handle::try_current() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!("Poller not started, no runtime available: {err}");
                    return;
                }
            },
        };
        let mut state = self.shared.lock();

        if let Some(previous) = state.timer.take() {
            tracing::debug!("Poller restarted, replacing running timer");
            previous.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        if self.fire_immediately {
            state.emit();
        }

        let interval = self.interval;
        let first_tick = Instant::now() + interval;
        let shared = Arc::downgrade(&self.shared);
        state.timer = Some(runtime.spawn(run_timer(shared, generation, first_tick, interval)));

        tracing::debug!(?interval, "Poller started");
    }

    fn stop(&self) {
        let mut state = self.shared.lock();
        state.generation = state.generation.wrapping_add(1);

        if let Some(timer) = state.timer.take() {
            timer.abort();
            tracing::debug!("Poller stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.shared.lock().timer.is_some()
    }
}

impl Drop for IntervalPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Debug for IntervalPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalPoller")
            .field("interval", &self.interval)
            .field("fire_immediately", &self.fire_immediately)
            .field("running", &self.is_running())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Shared {
    // The state is consistent between statements, a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, PollerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PollerState {
    /// Sends a tick to every subscriber, dropping the ones that went away
    fn emit(&mut self) {
        self.subscribers
            .retain(|subscriber| subscriber.send(Tick).is_ok());
        if self.subscribers.is_empty() {
            tracing::trace!("Tick emitted without subscribers");
        }
    }
}

async fn run_timer(weak: Weak<Shared>, generation: u64, first_tick: Instant, period: Duration) {
    let mut ticks = time::interval_at(first_tick, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticks.tick().await;

        let Some(shared) = weak.upgrade() else {
            break;
        };
        // Checked under the lock, so a returned `stop` can not race with this emission
        let mut state = shared.lock();
        if state.generation != generation {
            break;
        }
        state.emit();
    }
}
