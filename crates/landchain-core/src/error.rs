//! # Error Hierarchy
//!
//! Structured errors for ledger operations, built with `thiserror`.
//!
//! Every failure falls into one of three kinds (see [`ErrorKind`]):
//! the caller supplied incomplete input, the requested record does not
//! exist, or something went wrong that the caller cannot fix. The HTTP
//! layer maps these onto 400, 404 and 500 respectively.

use thiserror::Error;

/// Top-level error type for ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Required input was absent or empty.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record carries the requested uid.
    #[error("Record not found for UID: {uid}")]
    UidNotFound {
        /// The uid that was looked up.
        uid: String,
    },

    /// A history query matched zero records.
    #[error("No records found for UID: {uid}")]
    HistoryNotFound {
        /// The uid whose history was requested.
        uid: String,
    },

    /// Positional lookup outside `[0, len)`.
    #[error("Block index {index} not found. Total blocks: {total}")]
    IndexOutOfRange {
        /// The requested position.
        index: u64,
        /// Ledger length at the time of the lookup.
        total: usize,
    },

    /// Unexpected failure while hashing or serializing.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but could not be interpreted.
    #[error("invalid value for field {field}: {reason}")]
    InvalidField {
        /// The offending field name.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
}

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed input.
    Validation,
    /// No matching record or index.
    NotFound,
    /// Failure the caller cannot correct.
    Internal,
}

impl LedgerError {
    /// Return the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::UidNotFound { .. }
            | Self::HistoryNotFound { .. }
            | Self::IndexOutOfRange { .. } => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
