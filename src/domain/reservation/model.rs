//! Reservation domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::time_range::TimeRange;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Holds its time range; overlapping requests conflict
    Active,
    /// Released; does not block anything
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Strict parse; unknown statuses are a decode error at the wire
    /// boundary, never a silent default.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("active") {
            Some(Self::Active)
        } else if s.eq_ignore_ascii_case("cancelled") {
            Some(Self::Cancelled)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One existing reservation on a field for the date under computation.
///
/// The availability core only ever reads these as an immutable snapshot;
/// their lifecycle (confirmation, cancellation) is owned by the server.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: Uuid,
    pub range: TimeRange,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(range: TimeRange, status: ReservationStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            range,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn active(range: TimeRange) -> Self {
        Self::new(range, ReservationStatus::Active)
    }

    pub fn cancelled(range: TimeRange) -> Self {
        Self::new(range, ReservationStatus::Cancelled)
    }

    /// Whether this reservation blocks overlapping time.
    pub fn blocks(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::new(start, end).unwrap()
    }

    #[test]
    fn active_reservation_blocks() {
        let r = Reservation::active(range(600, 660));
        assert!(r.blocks());
        assert_eq!(r.status, ReservationStatus::Active);
    }

    #[test]
    fn cancelled_reservation_does_not_block() {
        let r = Reservation::cancelled(range(600, 660));
        assert!(!r.blocks());
    }

    #[test]
    fn status_parse_round_trip() {
        for status in [ReservationStatus::Active, ReservationStatus::Cancelled] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            ReservationStatus::parse("ACTIVE"),
            Some(ReservationStatus::Active)
        );
        assert_eq!(
            ReservationStatus::parse("cancelled"),
            Some(ReservationStatus::Cancelled)
        );
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert_eq!(ReservationStatus::parse("pending"), None);
        assert_eq!(ReservationStatus::parse(""), None);
    }

    #[test]
    fn fresh_reservations_get_distinct_ids() {
        let a = Reservation::active(range(600, 660));
        let b = Reservation::active(range(600, 660));
        assert_ne!(a.id, b.id);
    }
}
