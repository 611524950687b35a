//! The event hub: a synchronous, statically typed publish/subscribe channel.
//!
//! [`EventHub`] is the piece a type embeds to expose observable events. The
//! defining type keeps the hub in a private field so that it alone can call
//! [`EventHub::emit`]; external callers are handed a [`Subscriber`] view
//! (usually through the [`Subscribable`] trait), which can only register
//! handlers. That asymmetry - subscribe is public, emit is not - is the
//! hub's defining design decision: a type can offer observability of its
//! internal events without letting outsiders forge events on its behalf.
//!
//! Dispatch is a single synchronous pass. Handlers for a channel run in
//! registration order, and the first handler error aborts the pass and
//! propagates to the `emit` caller. Nothing here locks: a hub instance is
//! single-threaded by design. See [`SharedHub`](crate::SharedHub) for the
//! mutex-guarded variant.

use std::any::Any;
use std::collections::HashMap;

use tracing::trace;

use crate::errors::{DispatchError, DispatchResult};
use crate::event::{Event, Handler, HandlerResult};

/// A statically typed event emitter.
///
/// Each channel is identified by the [`Event::NAME`] of the event type
/// published on it and holds an ordered sequence of handlers. Registration
/// order is dispatch order; registering the same handler twice makes it run
/// twice per emit. There is no unsubscribe operation - a channel only grows,
/// and handlers live until the hub is dropped.
///
/// # Example
///
/// ```
/// use eventhub::{Event, EventHub};
///
/// struct Tick {
///     count: u64,
/// }
///
/// impl Event for Tick {
///     const NAME: &'static str = "tick";
/// }
///
/// let mut hub = EventHub::new();
/// hub.on(|tick: &Tick| {
///     println!("tick {}", tick.count);
///     Ok(())
/// });
/// let delivered = hub.emit(&Tick { count: 1 })?;
/// assert!(delivered);
/// # Ok::<(), eventhub::DispatchError>(())
/// ```
pub struct EventHub {
    // Maps channel names to their handlers, in registration order. Handlers
    // are stored type-erased; the concrete type behind each `Any` is
    // `Handler<E>` for the event type registered on that channel.
    channels: HashMap<&'static str, Vec<Box<dyn Any + Send>>>,
}

impl EventHub {
    /// Creates a hub with no registered handlers on any channel.
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }

    /// Subscribes a handler to the channel of event type `E`.
    ///
    /// The handler is appended after any previously registered handlers for
    /// the same channel. No deduplication is performed. Returns the hub
    /// itself so subscriptions can be chained.
    pub fn on<E, F>(&mut self, handler: F) -> &mut Self
    where
        E: Event,
        F: FnMut(&E) -> HandlerResult + Send + 'static,
    {
        let boxed: Handler<E> = Box::new(handler);
        self.channels.entry(E::NAME).or_default().push(Box::new(boxed));
        trace!(event = E::NAME, "handler registered");
        self
    }

    /// Publishes an event to every handler on its channel.
    ///
    /// Handlers are invoked synchronously, in registration order, each
    /// receiving a reference to the payload. The first handler error aborts
    /// the pass: handlers registered after the failing one are not invoked,
    /// and the fault propagates as [`DispatchError::Handler`].
    ///
    /// Returns `Ok(true)` if at least one handler was registered for the
    /// channel at the time of the call, `Ok(false)` otherwise.
    pub fn emit<E>(&mut self, payload: &E) -> DispatchResult<bool>
    where
        E: Event,
    {
        let Some(handlers) = self.channels.get_mut(E::NAME) else {
            return Ok(false);
        };

        trace!(event = E::NAME, handlers = handlers.len(), "dispatching");

        for stored in handlers {
            let handler = stored
                .downcast_mut::<Handler<E>>()
                .ok_or(DispatchError::ContractViolation { event: E::NAME })?;
            handler(payload).map_err(|source| DispatchError::Handler {
                event: E::NAME,
                source,
            })?;
        }

        Ok(true)
    }

    /// Returns the number of handlers registered for event type `E`.
    pub fn handler_count<E>(&self) -> usize
    where
        E: Event,
    {
        self.channels.get(E::NAME).map_or(0, Vec::len)
    }

    /// Returns the subscribe-only view of this hub.
    ///
    /// This is the narrowing accessor owning types use to expose their hub:
    /// the returned view can register handlers but cannot emit.
    pub fn subscriber(&mut self) -> Subscriber<'_> {
        Subscriber { hub: self }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, handlers) in &self.channels {
            map.entry(name, &handlers.len());
        }
        map.finish()
    }
}

/// A subscribe-only view of an [`EventHub`].
///
/// Holders of a `Subscriber` can register handlers but have no way to
/// publish. This is one half of the capability split: the owning type keeps
/// the hub (and with it `emit`) private and hands this view out.
#[derive(Debug)]
pub struct Subscriber<'a> {
    hub: &'a mut EventHub,
}

impl Subscriber<'_> {
    /// Subscribes a handler to the channel of event type `E`.
    ///
    /// Identical to [`EventHub::on`], returned `&mut Self` permits chaining.
    pub fn on<E, F>(&mut self, handler: F) -> &mut Self
    where
        E: Event,
        F: FnMut(&E) -> HandlerResult + Send + 'static,
    {
        self.hub.on(handler);
        self
    }

    /// Returns the number of handlers registered for event type `E`.
    pub fn handler_count<E>(&self) -> usize
    where
        E: Event,
    {
        self.hub.handler_count::<E>()
    }
}

/// Implemented by types that expose a subscribe-only event surface.
///
/// A type embedding an [`EventHub`] in a private field implements this by
/// delegating to [`EventHub::subscriber`]. Anything holding a mutable
/// reference to the type can then listen to its events, while emitting
/// remains internal to the type itself.
pub trait Subscribable {
    /// Returns the subscribe-only view of this type's events.
    fn subscriber(&mut self) -> Subscriber<'_>;
}

impl Subscribable for EventHub {
    fn subscriber(&mut self) -> Subscriber<'_> {
        Self::subscriber(self)
    }
}
