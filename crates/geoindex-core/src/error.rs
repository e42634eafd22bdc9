//! Error types.
//!
//! The core index structures ([`crate::GeoGrid`], [`crate::TieredInvertedIndex`])
//! never return a `Result` for programmer errors (out-of-range coordinates,
//! `division == 0`, `k == 0`) — those panic at the call site, because they
//! indicate a bug in the caller rather than a recoverable runtime condition.
//! [`GeoIndexError`] exists for the ambient, recoverable side of the crate:
//! loading a gazetteer file from disk.

use thiserror::Error;

/// Errors surfaced by the gazetteer loader.
#[derive(Debug, Error)]
pub enum GeoIndexError {
    /// Underlying I/O failure while reading a dataset file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not have enough tab-separated columns to be a place record.
    #[error("line {line}: expected at least {expected} tab-separated fields, found {found}")]
    TooFewFields {
        /// 1-based line number in the source file.
        line: usize,
        /// Minimum number of fields required.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A numeric column could not be parsed.
    #[error("line {line}: failed to parse {field} column ({value:?}): {reason}")]
    InvalidNumber {
        /// 1-based line number in the source file.
        line: usize,
        /// Name of the offending column.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
        /// Human-readable parse failure description.
        reason: String,
    },
}

/// Convenience alias used throughout the loader.
pub type Result<T> = std::result::Result<T, GeoIndexError>;
