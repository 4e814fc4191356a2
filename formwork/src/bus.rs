//! Shared action bus.
//!
//! A multi-subscriber broadcast channel carrying [`FormAction`]s from bound
//! controls to the state container and any other observers. Dispatch is
//! synchronous with the triggering event; subscribers consume at their own
//! pace and observe lag explicitly.

use log::trace;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::actions::FormAction;

const DEFAULT_CAPACITY: usize = 64;

/// Errors observed on the subscriber side of the bus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// The subscriber fell behind and missed this many actions.
    #[error("action stream lagged behind by {0} actions")]
    Lagged(u64),
    /// Every bus handle was dropped.
    #[error("action bus closed")]
    Closed,
}

/// Dispatching side of the bus.
///
/// Cheap to clone; every clone dispatches into the same channel.
#[derive(Debug)]
pub struct ActionBus<V> {
    tx: broadcast::Sender<FormAction<V>>,
}

impl<V: Clone> ActionBus<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Bus retaining up to `capacity` undelivered actions per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Dispatch an action to all current subscribers.
    ///
    /// Returns the number of subscribers reached. An action dispatched with
    /// no live subscribers is dropped.
    pub fn dispatch(&self, action: FormAction<V>) -> usize {
        trace!("dispatching {} for {}", action.kind(), action.control_id());
        match self.tx.send(action) {
            Ok(count) => count,
            Err(_) => {
                trace!("no subscribers, action dropped");
                0
            }
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Open a stream over subsequently dispatched actions.
    pub fn subscribe(&self) -> ActionStream<V> {
        ActionStream {
            rx: self.tx.subscribe(),
        }
    }
}

impl<V: Clone> Default for ActionBus<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ActionBus<V> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving side of the bus.
#[derive(Debug)]
pub struct ActionStream<V> {
    rx: broadcast::Receiver<FormAction<V>>,
}

impl<V: Clone> ActionStream<V> {
    /// Pop the next action if one is already queued.
    pub fn try_next(&mut self) -> Result<Option<FormAction<V>>, BusError> {
        use broadcast::error::TryRecvError;

        match self.rx.try_recv() {
            Ok(action) => Ok(Some(action)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Lagged(n)) => Err(BusError::Lagged(n)),
            Err(TryRecvError::Closed) => Err(BusError::Closed),
        }
    }

    /// Wait for the next action.
    pub async fn recv(&mut self) -> Result<FormAction<V>, BusError> {
        use broadcast::error::RecvError;

        match self.rx.recv().await {
            Ok(action) => Ok(action),
            Err(RecvError::Lagged(n)) => Err(BusError::Lagged(n)),
            Err(RecvError::Closed) => Err(BusError::Closed),
        }
    }
}
