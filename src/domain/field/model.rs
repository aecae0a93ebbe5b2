//! Field schedule domain entity

use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pricing::RateCard;
use crate::domain::time_range::{format_hhmm, Minutes, TimeRange, MINUTES_PER_DAY};

/// A field's daily open/close boundary.
///
/// Invariant: `opens_at < closes_at`, enforced at construction. Slot
/// generation never produces time outside this window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    opens_at: Minutes,
    closes_at: Minutes,
}

impl OperatingWindow {
    pub fn new(opens_at: Minutes, closes_at: Minutes) -> DomainResult<Self> {
        if opens_at >= closes_at {
            return Err(DomainError::Validation(format!(
                "operating window opens ({}) at or after it closes ({})",
                format_hhmm(opens_at),
                format_hhmm(closes_at)
            )));
        }
        if closes_at > MINUTES_PER_DAY {
            return Err(DomainError::Validation(
                "operating window closes past the end of the day".to_string(),
            ));
        }
        Ok(Self { opens_at, closes_at })
    }

    /// Build a window from `"HH:mm"` boundary strings.
    pub fn from_hhmm(opens_at: &str, closes_at: &str) -> DomainResult<Self> {
        use crate::domain::time_range::parse_hhmm;
        Self::new(parse_hhmm(opens_at)?, parse_hhmm(closes_at)?)
    }

    pub fn opens_at(&self) -> Minutes {
        self.opens_at
    }

    pub fn closes_at(&self) -> Minutes {
        self.closes_at
    }

    pub fn contains(&self, range: &TimeRange) -> bool {
        self.opens_at <= range.start() && range.end() <= self.closes_at
    }
}

impl std::fmt::Display for OperatingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            format_hhmm(self.opens_at),
            format_hhmm(self.closes_at)
        )
    }
}

/// Static record of a bookable field: identity, operating hours and rates.
///
/// Fetched once per field; the operating window and rate card change rarely
/// and are owned by the venue administration, not by this library.
#[derive(Debug, Clone)]
pub struct FieldSchedule {
    pub field_id: Uuid,
    pub name: String,
    pub operating: OperatingWindow,
    pub rates: RateCard,
}

impl FieldSchedule {
    pub fn new(
        field_id: Uuid,
        name: impl Into<String>,
        operating: OperatingWindow,
        rates: RateCard,
    ) -> Self {
        Self {
            field_id,
            name: name.into(),
            operating,
            rates,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(OperatingWindow::new(1320, 480).is_err());
        assert!(OperatingWindow::new(480, 480).is_err());
        assert!(OperatingWindow::new(480, 1320).is_ok());
    }

    #[test]
    fn window_rejects_close_past_midnight() {
        assert!(OperatingWindow::new(1380, 1500).is_err());
        assert!(OperatingWindow::new(1380, 1440).is_ok());
    }

    #[test]
    fn window_from_hhmm() {
        let w = OperatingWindow::from_hhmm("08:00", "22:00").unwrap();
        assert_eq!(w.opens_at(), 480);
        assert_eq!(w.closes_at(), 1320);
        assert_eq!(w.to_string(), "08:00-22:00");
    }

    #[test]
    fn window_containment_includes_boundaries() {
        let w = OperatingWindow::from_hhmm("08:00", "22:00").unwrap();
        assert!(w.contains(&TimeRange::from_hhmm("08:00", "09:00").unwrap()));
        assert!(w.contains(&TimeRange::from_hhmm("21:00", "22:00").unwrap()));
        assert!(!w.contains(&TimeRange::from_hhmm("07:30", "08:30").unwrap()));
        assert!(!w.contains(&TimeRange::from_hhmm("21:30", "22:30").unwrap()));
    }
}
