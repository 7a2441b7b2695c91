//! Error types for queue-lab.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("queue is empty")]
    QueueEmpty,

    #[error("invalid size {requested}: must be > {current}")]
    InvalidNewSize { requested: usize, current: usize },

    #[error("initial capacity must be positive, got {0}")]
    InvalidCapacity(i64),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("memory allocation failed for {requested} slots: {source}")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Queue-level outcomes the caller can act on without tearing the engine down.
    ///
    /// `AllocationFailed` is recoverable during growth; the binary treats it as
    /// fatal only when it comes out of initial construction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::QueueFull { .. }
                | Error::QueueEmpty
                | Error::InvalidNewSize { .. }
                | Error::AllocationFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
