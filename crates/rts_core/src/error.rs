//! Error types for data definitions.

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Top-level error type for data catalog errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// Two records of the same kind share an identifier.
    #[error("Duplicate {kind} ID: '{id}'")]
    DuplicateId {
        /// Record kind (e.g. "unit", "weapon").
        kind: &'static str,
        /// Offending identifier.
        id: String,
    },

    /// Two palettes were defined for the same faction.
    #[error("Duplicate palette for faction '{0}'")]
    DuplicatePalette(String),

    /// More than one balance version was defined.
    #[error("Balance version defined more than once ('{existing}' and '{incoming}')")]
    DuplicateBalanceVersion {
        /// Version already present.
        existing: String,
        /// Version that was being merged in.
        incoming: String,
    },

    /// Catalog failed consistency checks.
    #[error("Data validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}
