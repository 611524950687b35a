//! `EventHub` - a statically typed event emitter with a subscribe-only view
//!
//! This library provides a minimal publish/subscribe primitive restricted to
//! a closed, caller-defined set of event types. A type embeds an [`EventHub`]
//! privately, emits on it from its own methods, and exposes only the
//! [`Subscriber`] view (via [`Subscribable`]) to the outside world - so any
//! holder of a reference may listen, but only the defining type may publish.
//!
//! Dispatch is synchronous and unisolated: handlers run in registration
//! order, and the first handler error aborts the pass and propagates to the
//! emitter. For hubs shared across threads, [`SharedHub`] provides the same
//! API behind a mutex.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod event;
pub mod guard;
pub mod hub;
pub mod shared;

pub use errors::{DispatchError, DispatchResult, HandlerError};
pub use event::{ErrorHandler, Event, Handler, HandlerResult, Predicate, Provider};
pub use hub::{EventHub, Subscribable, Subscriber};
pub use shared::SharedHub;
