//! The compile-time event contract and the function shapes used around it.
//!
//! An event type declares the string channel it is published on through
//! [`Event::NAME`]; the event value itself is the payload delivered to each
//! handler. The contract between a channel name and its payload type lives
//! entirely in the type system - there is no runtime schema.

use crate::errors::HandlerError;

/// Contract tying an event type to its channel name.
///
/// Implementors declare the channel their values are published on. Handlers
/// subscribed for `E: Event` receive `&E`, so the payload signature for a
/// channel is fixed at compile time by whichever type declares that name.
///
/// `NAME` is expected to be unique per event type. Two distinct types
/// declaring the same name have stepped outside the static contract; the
/// mismatch is reported during dispatch, not at registration.
///
/// # Example
///
/// ```
/// use eventhub::Event;
///
/// #[derive(Debug)]
/// struct Tick {
///     count: u64,
/// }
///
/// impl Event for Tick {
///     const NAME: &'static str = "tick";
/// }
/// ```
pub trait Event: 'static {
    /// The channel name this event is published on.
    const NAME: &'static str;
}

/// Result returned by an event handler.
///
/// A handler that returns `Err` aborts the current dispatch pass; the error
/// propagates to the caller of `emit` and no later handler runs.
pub type HandlerResult = Result<(), HandlerError>;

/// A boxed, fallible event handler as stored by the hub.
pub type Handler<E> = Box<dyn FnMut(&E) -> HandlerResult + Send>;

/// A single-element predicate function.
pub type Predicate<T> = fn(&T) -> bool;

/// A function producing a value of a given type without arguments.
pub type Provider<T> = Box<dyn Fn() -> T + Send>;

/// A handler dedicated to error-carrying events.
pub type ErrorHandler = Box<dyn FnMut(&HandlerError) + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl Event for Ping {
        const NAME: &'static str = "ping";
    }

    #[test]
    fn event_name_is_available_as_a_constant() {
        assert_eq!(Ping::NAME, "ping");
    }

    #[test]
    fn handler_alias_accepts_closures_with_captured_state() {
        let mut seen = 0_u32;
        let mut handler: Handler<Ping> = Box::new(move |_ping| {
            seen += 1;
            Ok(())
        });
        assert!(handler(&Ping).is_ok());
    }

    #[test]
    fn provider_alias_produces_values() {
        let provider: Provider<u64> = Box::new(|| 42);
        assert_eq!(provider(), 42);
    }
}
