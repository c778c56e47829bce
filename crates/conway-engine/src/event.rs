//! Change notifications for presentation layers.
//!
//! Consumers call [`Engine::subscribe`](crate::Engine::subscribe) and
//! receive [`EngineEvent`]s on a bounded crossbeam channel holding at
//! most [`EVENT_QUEUE_CAPACITY`] events. Events for steps are published
//! in generation order.
//!
//! A subscriber that falls behind loses events: while its queue is full,
//! new events are dropped for that subscriber only and it stays
//! subscribed. [`Engine::snapshot`](crate::Engine::snapshot) always
//! reflects the current state, so a lagging consumer can resync from it.
//! Dropping the receiver unsubscribes; the hub prunes disconnected
//! senders on the next publish.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use parking_lot::Mutex;

use crate::metrics::TickMetrics;

/// Maximum number of undelivered events queued per subscriber.
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// What caused a non-step board change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCause {
    /// A single cell was set or toggled.
    CellEdit,
    /// The board was resized.
    Resize,
    /// Every cell was killed.
    Clear,
    /// The board was replaced by a random one.
    Randomize,
    /// The edge behavior changed.
    Topology,
}

/// Something observable happened to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// A generation was committed.
    Stepped(TickMetrics),
    /// The board was mutated outside the rule.
    BoardChanged {
        /// What happened.
        cause: ChangeCause,
        /// Generation counter after the change.
        generation: u64,
        /// Live cells after the change.
        population: usize,
        /// Board columns after the change.
        width: u32,
        /// Board rows after the change.
        height: u32,
    },
    /// The tick thread was started.
    Started,
    /// The tick thread was asked to stop.
    Stopped,
    /// The requested rate changed.
    RateChanged {
        /// New requested rate, already clamped.
        requested: f64,
    },
}

/// Fan-out of events to any number of subscribers.
#[derive(Default)]
pub(crate) struct EventHub {
    subscribers: Mutex<Vec<Sender<EngineEvent>>>,
}

impl EventHub {
    pub fn subscribe(&self) -> Receiver<EngineEvent> {
        let (tx, rx) = crossbeam_channel::bounded(EVENT_QUEUE_CAPACITY);
        self.subscribers.lock().push(tx);
        rx
    }

    /// Send to every live subscriber without blocking.
    ///
    /// Full queues drop the event; disconnected subscribers are removed.
    pub fn publish(&self, event: EngineEvent) {
        let mut subs = self.subscribers.lock();
        subs.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
