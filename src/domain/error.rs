//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use super::time_range::TimeRange;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Duplicate slot in selection: {0}")]
    DuplicateSelection(TimeRange),

    #[error("Booking conflict on field {field_id}: {reason}")]
    BookingConflict { field_id: Uuid, reason: String },

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}

impl DomainError {
    /// Whether this error is likely transient (network blip, upstream hiccup)
    /// and the *fetch* may succeed if retried. Booking submission is never
    /// retried automatically, whatever the error.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::DataUnavailable(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────
