//! Error types for event dispatch.
//!
//! The taxonomy is deliberately small, matching the two failure modes the
//! hub actually has:
//!
//! - **Handler fault**: a registered handler returned an error mid-pass.
//!   The fault is never caught, wrapped in retries, or logged away; it
//!   propagates to whoever called `emit`, and later handlers in the same
//!   pass do not run.
//! - **Contract violation**: the handler stored under a channel name does
//!   not accept the payload type being published. This can only happen when
//!   two distinct event types declare the same name, which the static
//!   contract cannot rule out.
//!
//! There are no I/O, parsing, or resource-acquisition failures to model.

use thiserror::Error;

/// An opaque fault produced by an event handler.
///
/// Handlers signal failure by returning this; the hub treats it as fatal for
/// the current dispatch pass. Any error type can be converted into it, as
/// can plain message strings.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(Box<dyn std::error::Error + Send + Sync>);

impl HandlerError {
    /// Creates a handler error from any error value or message string.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }

    /// Returns the underlying error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

/// Errors that can occur while dispatching an event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed during the dispatch pass.
    ///
    /// Handlers registered after the failing one were not invoked in that
    /// pass.
    #[error("handler for event `{event}` failed: {source}")]
    Handler {
        /// The channel name being dispatched when the handler failed.
        event: &'static str,
        /// The fault reported by the handler.
        source: HandlerError,
    },

    /// A stored handler does not match the published payload type.
    ///
    /// This indicates two event types declaring the same channel name.
    #[error("handler registered for event `{event}` does not accept the published payload type")]
    ContractViolation {
        /// The channel name with conflicting registrations.
        event: &'static str,
    },
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_error_from_message() {
        let err = HandlerError::new("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn handler_error_from_error_value() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "disk gone");
        let err = HandlerError::new(io);
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn dispatch_error_display_includes_event_name() {
        let err = DispatchError::Handler {
            event: "tick",
            source: HandlerError::new("boom"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("tick"));
        assert!(rendered.contains("boom"));

        let err = DispatchError::ContractViolation { event: "tick" };
        assert!(err.to_string().contains("tick"));
    }
}
