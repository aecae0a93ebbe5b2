//! Half-open time intervals on a single calendar day.
//!
//! All interval arithmetic in this crate runs on integer minute-of-day
//! values. `"HH:mm"` strings exist only at the wire boundary and are
//! converted here, in one place.

use std::fmt;

use super::error::{DomainError, DomainResult};

/// Minute-of-day. `0` is midnight, `1440` is the exclusive end of the day.
pub type Minutes = u32;

/// Minutes in one day, the exclusive upper bound for any minute-of-day value.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;

/// A half-open interval `[start, end)` within one day.
///
/// Invariant: `start < end`, enforced at construction. Two ranges that only
/// touch at a boundary do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: Minutes,
    end: Minutes,
}

impl TimeRange {
    pub fn new(start: Minutes, end: Minutes) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::Validation(format!(
                "time range start ({}) must be before end ({})",
                format_hhmm(start),
                format_hhmm(end)
            )));
        }
        if end > MINUTES_PER_DAY {
            return Err(DomainError::Validation(format!(
                "time range end ({}) is past the end of the day",
                end
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range from `"HH:mm"` boundary strings.
    pub fn from_hhmm(start: &str, end: &str) -> DomainResult<Self> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?)
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Exclusive-boundary overlap test: `[10:00,11:00)` and `[11:00,12:00)`
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_minute(&self, minute: Minutes) -> bool {
        self.start <= minute && minute < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// Parse `"HH:mm"` into a minute-of-day value. `"24:00"` is accepted as the
/// exclusive end of the day.
pub fn parse_hhmm(s: &str) -> DomainResult<Minutes> {
    fn invalid(s: &str) -> DomainError {
        DomainError::Validation(format!("invalid time of day: {:?}", s))
    }

    let (h, m) = s.split_once(':').ok_or_else(|| invalid(s))?;
    let hours: Minutes = h.parse().map_err(|_| invalid(s))?;
    let minutes: Minutes = m.parse().map_err(|_| invalid(s))?;

    if minutes > 59 || hours > 24 || (hours == 24 && minutes != 0) {
        return Err(invalid(s));
    }
    Ok(hours * 60 + minutes)
}

/// Format a minute-of-day value as `"HH:mm"`.
pub fn format_hhmm(minute: Minutes) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_and_empty_ranges() {
        assert!(TimeRange::new(600, 600).is_err());
        assert!(TimeRange::new(660, 600).is_err());
        assert!(TimeRange::new(600, 660).is_ok());
    }

    #[test]
    fn new_rejects_range_past_midnight() {
        assert!(TimeRange::new(1380, 1441).is_err());
        assert!(TimeRange::new(1380, 1440).is_ok());
    }

    #[test]
    fn overlap_is_exclusive_at_boundaries() {
        let a = TimeRange::new(600, 660).unwrap();
        let b = TimeRange::new(660, 720).unwrap();
        // touching at 11:00 is not a conflict
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = TimeRange::new(630, 690).unwrap();
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn overlap_with_containment() {
        let outer = TimeRange::new(480, 720).unwrap();
        let inner = TimeRange::new(540, 600).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn contains_minute_is_half_open() {
        let r = TimeRange::new(600, 660).unwrap();
        assert!(r.contains_minute(600));
        assert!(r.contains_minute(659));
        assert!(!r.contains_minute(660));
        assert!(!r.contains_minute(599));
    }

    #[test]
    fn parse_hhmm_valid() {
        assert_eq!(parse_hhmm("00:00").unwrap(), 0);
        assert_eq!(parse_hhmm("08:00").unwrap(), 480);
        assert_eq!(parse_hhmm("22:30").unwrap(), 1350);
        assert_eq!(parse_hhmm("24:00").unwrap(), MINUTES_PER_DAY);
    }

    #[test]
    fn parse_hhmm_invalid() {
        for s in ["", "8", "08:60", "25:00", "24:01", "aa:bb", "08-00"] {
            assert!(parse_hhmm(s).is_err(), "accepted {:?}", s);
        }
    }

    #[test]
    fn format_hhmm_pads() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(485), "08:05");
        assert_eq!(format_hhmm(1350), "22:30");
    }

    #[test]
    fn display_round_trip() {
        let r = TimeRange::from_hhmm("09:15", "10:45").unwrap();
        assert_eq!(r.to_string(), "09:15-10:45");
        assert_eq!(r.duration(), 90);
    }
}
