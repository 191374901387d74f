use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;

/// A single poll event, carries no data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tick;

/// Receiving end of a poller
///
/// Every subscription gets every tick emitted after it was created, in emission order.
/// Earlier ticks are not replayed. Ticks queue up until read, so a subscription that
/// reads late still sees all of them. The subscription only ends once the poller itself
/// is dropped.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<Tick>,
}

impl Subscription {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<Tick>) -> Self {
        Self { receiver }
    }

    /// Waits for the next tick
    ///
    /// Returns `None` once the poller was dropped and all queued ticks were read
    pub async fn recv(&mut self) -> Option<Tick> {
        self.receiver.recv().await
    }

    /// Takes a queued tick without waiting
    pub fn try_recv(&mut self) -> Option<Tick> {
        self.receiver.try_recv().ok()
    }

    /// Number of ticks emitted but not read yet
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Converts the subscription into a stream of ticks
    pub fn into_stream(self) -> BoxStream<'static, Tick> {
        stream::unfold(self, |mut subscription| async move {
            let tick = subscription.recv().await?;
            Some((tick, subscription))
        })
        .boxed()
    }
}
