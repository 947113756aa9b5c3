use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Form validation message, shown next to the modal
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Page size {size} is not offered, expected one of: {allowed}")]
    UnsupportedPageSize { size: usize, allowed: String },

    #[error("Conflicting filters on column: {0}")]
    ConflictingFilters(String),

    #[error("Filter on {field} does not suit a {kind} column")]
    PredicateMismatch { field: String, kind: &'static str },

    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: String, value: String },

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}
