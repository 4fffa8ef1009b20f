//! Bounded injection queue between producer threads and the world.
//!
//! Producers hold cloneable [`InjectionSender`]s and submit commands with
//! [`try_send`](crossbeam_channel::Sender::try_send) semantics: a full queue
//! rejects immediately instead of blocking the producer. The world drains
//! the queue on its own thread, between ticks.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use dualgrid_core::{Cell, IngressError, Injection};

/// Outcome of one drain of the injection queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Injections written into the committed state.
    pub applied: u64,
    /// Injections whose target cell was off the grid.
    pub dropped: u64,
}

/// Cloneable handle for submitting injections to a world from any thread.
///
/// Obtained from [`GridWorld::injection_sender()`](crate::GridWorld::injection_sender).
pub struct InjectionSender<T> {
    tx: Sender<Injection<T>>,
}

impl<T> Clone for InjectionSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> std::fmt::Debug for InjectionSender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionSender")
            .field("pending", &self.tx.len())
            .field("capacity", &self.tx.capacity())
            .finish()
    }
}

impl<T> InjectionSender<T> {
    /// Queue `injection` for the next drain.
    ///
    /// Returns `Err(IngressError::QueueFull)` if the queue is at capacity and
    /// `Err(IngressError::Disconnected)` if the world has been dropped.
    pub fn submit(&self, injection: Injection<T>) -> Result<(), IngressError> {
        self.tx.try_send(injection).map_err(|e| match e {
            TrySendError::Full(_) => IngressError::QueueFull,
            TrySendError::Disconnected(_) => IngressError::Disconnected,
        })
    }

    /// Queue an overwrite of `cell` with `value`.
    pub fn set(&self, cell: Cell, value: T) -> Result<(), IngressError> {
        self.submit(Injection::set(cell, value))
    }

    /// Queue a read-modify-write of `cell`.
    pub fn update(
        &self,
        cell: Cell,
        f: impl FnOnce(T) -> T + Send + 'static,
    ) -> Result<(), IngressError> {
        self.submit(Injection::update(cell, f))
    }

    /// Injections currently waiting for a drain.
    pub fn pending(&self) -> usize {
        self.tx.len()
    }
}

/// World-side end of the injection channel.
///
/// Holds a sender too, so new [`InjectionSender`]s can be handed out for
/// as long as the world lives.
pub(crate) struct InjectionQueue<T> {
    tx: Sender<Injection<T>>,
    rx: Receiver<Injection<T>>,
}

impl<T> InjectionQueue<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> InjectionSender<T> {
        InjectionSender {
            tx: self.tx.clone(),
        }
    }

    /// Take the injections queued so far.
    ///
    /// Bounded by the queue length at the time of the call, so producers
    /// that keep submitting cannot stall the drain.
    pub(crate) fn drain(&self) -> impl Iterator<Item = Injection<T>> + '_ {
        let pending = self.rx.len();
        self.rx.try_iter().take(pending)
    }

    pub(crate) fn len(&self) -> usize {
        self.rx.len()
    }
}
