//! Error types for natural ordering.

use thiserror::Error;

/// Errors that can occur while ordering records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NatSortError {
    /// The accessor produced something other than text (or null) for a record.
    ///
    /// `index` is the record's position in the input, `found` names the kind
    /// of value that was returned.
    #[error("record {index}: expected a text field value, got {found}")]
    InvalidFieldValue { index: usize, found: &'static str },
}

/// Result type for natural ordering operations.
pub type Result<T> = std::result::Result<T, NatSortError>;
