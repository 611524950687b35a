//! Mutex-guarded hub for instances shared across threads.
//!
//! [`EventHub`](crate::EventHub) itself does no locking: its handler
//! sequences are mutated by `on` and read by `emit` with no synchronization,
//! which is correct for the single-threaded case it is designed for. When an
//! emitter must be shared and mutated from several threads, [`SharedHub`]
//! wraps the same API behind a mutex so that registration and dispatch are
//! mutually exclusive.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::DispatchResult;
use crate::event::{Event, HandlerResult};
use crate::hub::EventHub;

/// Thread-safe wrapper around an [`EventHub`].
///
/// Cloning a `SharedHub` shares the underlying channel storage; all clones
/// subscribe to and emit on the same hub. Every operation takes the lock for
/// its full duration, so a dispatch pass observes a stable handler sequence
/// and handlers never run concurrently with registration.
///
/// Note that a handler which subscribes to the same `SharedHub` it was
/// dispatched from will deadlock, since the lock is held across the pass.
#[derive(Clone, Debug, Default)]
pub struct SharedHub {
    inner: Arc<Mutex<EventHub>>,
}

impl SharedHub {
    /// Creates a shared hub with no registered handlers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventHub::new())),
        }
    }

    /// Subscribes a handler to the channel of event type `E`.
    ///
    /// Semantics match [`EventHub::on`]; returns `&Self` for chaining.
    pub fn on<E, F>(&self, handler: F) -> &Self
    where
        E: Event,
        F: FnMut(&E) -> HandlerResult + Send + 'static,
    {
        self.inner.lock().on(handler);
        self
    }

    /// Publishes an event to every handler on its channel.
    ///
    /// Semantics match [`EventHub::emit`]. The lock is held for the entire
    /// dispatch pass.
    pub fn emit<E>(&self, payload: &E) -> DispatchResult<bool>
    where
        E: Event,
    {
        self.inner.lock().emit(payload)
    }

    /// Returns the number of handlers registered for event type `E`.
    pub fn handler_count<E>(&self) -> usize
    where
        E: Event,
    {
        self.inner.lock().handler_count::<E>()
    }
}
