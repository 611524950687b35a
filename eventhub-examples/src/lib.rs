//! Example implementations using the `EventHub` typed emitter.
//!
//! These examples show the intended embedding pattern: a domain type keeps
//! its hub private, publishes from its own methods, and exposes only the
//! subscribe view to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod transfer;

pub use transfer::{
    FileTransfer, TransferCompleted, TransferError, TransferFailed, TransferId, TransferProgress,
};
