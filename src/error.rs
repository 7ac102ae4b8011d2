//! Error types for bubble-trace

use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, TraceError>;

/// Errors at the edges of a sort: writing the trace and reading input.
///
/// Sorting a slice cannot fail.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to write trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value {token:?} in sequence")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("sequence {0:?} contains no values")]
    EmptySequence(String),
}
