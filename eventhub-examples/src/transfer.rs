//! A file transfer that reports progress through a private event hub.
//!
//! `FileTransfer` owns its [`EventHub`] and is the only code that emits on
//! it. Callers observe the transfer by taking the [`Subscriber`] view
//! through [`Subscribable`]; they have no way to forge progress or
//! completion events.

use eventhub::{DispatchError, Event, EventHub, Subscribable, Subscriber};
use nutype::nutype;
use serde::Serialize;
use tracing::debug;

/// Identifier for a transfer.
///
/// Guaranteed non-empty and at most 64 characters once constructed.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct TransferId(String);

/// Emitted after every chunk, with the running byte counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferProgress {
    /// The transfer reporting progress.
    pub id: TransferId,
    /// Bytes sent so far, including the current chunk.
    pub sent_bytes: u64,
    /// Total bytes expected for the transfer.
    pub total_bytes: u64,
}

impl Event for TransferProgress {
    const NAME: &'static str = "transfer.progress";
}

/// Emitted once, when the final chunk brings the transfer to its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferCompleted {
    /// The completed transfer.
    pub id: TransferId,
}

impl Event for TransferCompleted {
    const NAME: &'static str = "transfer.completed";
}

/// Emitted when the transfer is aborted before completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferFailed {
    /// The aborted transfer.
    pub id: TransferId,
    /// Why the transfer was aborted.
    pub reason: String,
}

impl Event for TransferFailed {
    const NAME: &'static str = "transfer.failed";
}

/// Errors surfaced by transfer operations.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The transfer already reached its total or was aborted.
    #[error("transfer `{id}` is already finished")]
    AlreadyFinished {
        /// The finished transfer.
        id: TransferId,
    },

    /// A subscriber's handler failed while progress was being dispatched.
    #[error("event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

/// A transfer of a known number of bytes, observable through its events.
#[derive(Debug)]
pub struct FileTransfer {
    id: TransferId,
    total_bytes: u64,
    sent_bytes: u64,
    finished: bool,
    events: EventHub,
}

impl FileTransfer {
    /// Creates a transfer expecting `total_bytes` in total.
    pub fn new(id: TransferId, total_bytes: u64) -> Self {
        Self {
            id,
            total_bytes,
            sent_bytes: 0,
            finished: false,
            events: EventHub::new(),
        }
    }

    /// Bytes sent so far.
    pub const fn sent_bytes(&self) -> u64 {
        self.sent_bytes
    }

    /// Records a sent chunk, emitting progress and, on the final chunk,
    /// completion.
    ///
    /// Handler faults from subscribers propagate out of this call; the
    /// transfer state itself is updated before dispatch, so a faulting
    /// subscriber does not lose the chunk.
    pub fn send_chunk(&mut self, bytes: u64) -> Result<(), TransferError> {
        if self.finished {
            return Err(TransferError::AlreadyFinished {
                id: self.id.clone(),
            });
        }

        self.sent_bytes = self.total_bytes.min(self.sent_bytes + bytes);
        debug!(
            id = %self.id,
            sent = self.sent_bytes,
            total = self.total_bytes,
            "chunk recorded"
        );

        self.events.emit(&TransferProgress {
            id: self.id.clone(),
            sent_bytes: self.sent_bytes,
            total_bytes: self.total_bytes,
        })?;

        if self.sent_bytes >= self.total_bytes {
            self.finished = true;
            self.events.emit(&TransferCompleted {
                id: self.id.clone(),
            })?;
        }

        Ok(())
    }

    /// Aborts the transfer, emitting a failure event with the reason.
    pub fn abort(&mut self, reason: impl Into<String>) -> Result<(), TransferError> {
        if self.finished {
            return Err(TransferError::AlreadyFinished {
                id: self.id.clone(),
            });
        }

        self.finished = true;
        self.events.emit(&TransferFailed {
            id: self.id.clone(),
            reason: reason.into(),
        })?;

        Ok(())
    }
}

impl Subscribable for FileTransfer {
    fn subscriber(&mut self) -> Subscriber<'_> {
        self.events.subscriber()
    }
}
