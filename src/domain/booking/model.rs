//! Booking domain entities

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pricing::Money;
use crate::domain::time_range::TimeRange;

/// A booking submission: one or more time ranges on a field for a date.
///
/// Ranges need not be contiguous; the checkout flow allows several
/// disjoint hourly slots in one booking.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub field_id: Uuid,
    pub date: NaiveDate,
    pub ranges: Vec<TimeRange>,
    pub participant_count: u32,
}

impl BookingRequest {
    pub fn new(
        field_id: Uuid,
        date: NaiveDate,
        ranges: Vec<TimeRange>,
        participant_count: u32,
    ) -> Self {
        Self {
            field_id,
            date,
            ranges,
            participant_count,
        }
    }

    /// Local sanity checks, run before any network round trip.
    pub fn validate(&self) -> DomainResult<()> {
        if self.ranges.is_empty() {
            return Err(DomainError::Validation(
                "booking must cover at least one time range".to_string(),
            ));
        }
        if self.participant_count == 0 {
            return Err(DomainError::Validation(
                "participant count must be positive".to_string(),
            ));
        }
        for (i, a) in self.ranges.iter().enumerate() {
            for b in &self.ranges[i + 1..] {
                if a.overlaps(b) {
                    return Err(DomainError::Validation(format!(
                        "requested ranges {} and {} overlap",
                        a, b
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A confirmed booking as returned by the authoritative server.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub field_id: Uuid,
    pub date: NaiveDate,
    pub ranges: Vec<TimeRange>,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────
