//! Availability validation for arbitrary requested ranges
//!
//! A requested booking window need not align to slot boundaries. The
//! validator decides whether the range is free; when it is not, it also
//! reports which reservations are in the way and proposes free windows of
//! the same length.

use super::slots::{generate_slots, Slot};
use crate::domain::error::DomainResult;
use crate::domain::field::OperatingWindow;
use crate::domain::pricing::Money;
use crate::domain::reservation::Reservation;
use crate::domain::time_range::{Minutes, TimeRange};

/// A user's requested booking window.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityQuery {
    pub range: TimeRange,
}

impl AvailabilityQuery {
    pub fn new(range: TimeRange) -> Self {
        Self { range }
    }
}

/// Outcome of an availability check.
///
/// `conflicts` explains *why* a range is unavailable; `alternatives` are
/// proposed substitute windows, empty when the range is available.
#[derive(Debug, Clone)]
pub struct AvailabilityResult {
    pub available: bool,
    pub conflicts: Vec<Reservation>,
    pub alternatives: Vec<TimeRange>,
}

/// Check a requested range against the reservation snapshot.
///
/// The verdict is purely an overlap test against active reservations; when
/// the range is taken, the slot sequence is regenerated over the same
/// window and snapshot and scanned for substitute windows of the requested
/// length.
pub fn check_availability<F>(
    query: &AvailabilityQuery,
    window: &OperatingWindow,
    reservations: &[Reservation],
    slot_duration: Minutes,
    pricing: F,
) -> DomainResult<AvailabilityResult>
where
    F: Fn(&TimeRange) -> Money,
{
    let conflicts: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.blocks() && r.range.overlaps(&query.range))
        .cloned()
        .collect();

    if conflicts.is_empty() {
        return Ok(AvailabilityResult {
            available: true,
            conflicts,
            alternatives: Vec::new(),
        });
    }

    let slots = generate_slots(window, reservations, slot_duration, pricing)?;
    let alternatives = find_alternatives(&slots, query.range.duration());

    Ok(AvailabilityResult {
        available: false,
        conflicts,
        alternatives,
    })
}

/// Scan the slot sequence for maximal contiguous runs of available slots
/// and return each run long enough for `wanted` minutes, truncated to
/// exactly `wanted` from the run's beginning. Runs come back in
/// chronological order.
pub fn find_alternatives(slots: &[Slot], wanted: Minutes) -> Vec<TimeRange> {
    if wanted == 0 {
        return Vec::new();
    }

    // collect maximal free runs as (start, end) pairs; slot contiguity is
    // guaranteed by generation, so a run extends while slots stay available
    let mut runs: Vec<(Minutes, Minutes)> = Vec::new();
    let mut current: Option<(Minutes, Minutes)> = None;
    for slot in slots {
        if slot.available {
            current = match current.take() {
                Some((start, _)) => Some((start, slot.range.end())),
                None => Some((slot.range.start(), slot.range.end())),
            };
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs.extend(current);

    runs.into_iter()
        .filter(|(start, end)| end - start >= wanted)
        .filter_map(|(start, _)| TimeRange::new(start, start + wanted).ok())
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::new(start, end).unwrap()
    }

    fn window() -> OperatingWindow {
        OperatingWindow::new(480, 1320).unwrap()
    }

    fn flat_price(_: &TimeRange) -> Money {
        Decimal::from(100)
    }

    #[test]
    fn free_range_is_available_with_no_alternatives() {
        let query = AvailabilityQuery::new(range(600, 720));
        let result = check_availability(&query, &window(), &[], 60, flat_price).unwrap();
        assert!(result.available);
        assert!(result.conflicts.is_empty());
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn overlapping_active_reservation_makes_range_unavailable() {
        let blocker = Reservation::active(range(600, 660));
        let query = AvailabilityQuery::new(range(600, 720));
        let result =
            check_availability(&query, &window(), &[blocker.clone()], 60, flat_price).unwrap();
        assert!(!result.available);
        assert_eq!(result.conflicts.len(), 1);
        assert_eq!(result.conflicts[0].id, blocker.id);
    }

    #[test]
    fn cancelled_reservation_never_conflicts() {
        let cancelled = Reservation::cancelled(range(600, 660));
        let query = AvailabilityQuery::new(range(600, 720));
        let result = check_availability(&query, &window(), &[cancelled], 60, flat_price).unwrap();
        assert!(result.available);
    }

    #[test]
    fn boundary_touch_is_not_a_conflict() {
        let blocker = Reservation::active(range(540, 600));
        let query = AvailabilityQuery::new(range(600, 660));
        let result = check_availability(&query, &window(), &[blocker], 60, flat_price).unwrap();
        assert!(result.available);
    }

    #[test]
    fn alternatives_follow_the_worked_example() {
        // window 08:00-22:00, hourly slots, one active reservation 10:00-11:00,
        // query [10:00,12:00): the next free contiguous 2h run starts at 11:00
        let blocker = Reservation::active(range(600, 660));
        let query = AvailabilityQuery::new(range(600, 720));
        let result = check_availability(&query, &window(), &[blocker], 60, flat_price).unwrap();
        assert!(!result.available);
        assert!(result.alternatives.contains(&range(660, 780)));
        // first proposal is the earliest free run: 08:00-10:00
        assert_eq!(result.alternatives[0], range(480, 600));
    }

    #[test]
    fn alternatives_are_chronological_and_themselves_available() {
        let snapshot = vec![
            Reservation::active(range(600, 660)),
            Reservation::active(range(780, 840)),
        ];
        let query = AvailabilityQuery::new(range(600, 720));
        let result =
            check_availability(&query, &window(), &snapshot, 60, flat_price).unwrap();
        assert!(!result.available);
        for pair in result.alternatives.windows(2) {
            assert!(pair[0].start() < pair[1].start());
        }
        for alt in &result.alternatives {
            assert_eq!(alt.duration(), query.range.duration());
            let recheck = check_availability(
                &AvailabilityQuery::new(*alt),
                &window(),
                &snapshot,
                60,
                flat_price,
            )
            .unwrap();
            assert!(recheck.available, "alternative {} is not free", alt);
        }
    }

    #[test]
    fn no_alternatives_when_no_run_is_long_enough() {
        // every second hour is taken, so no free 2h run exists
        let snapshot: Vec<Reservation> = (0..7)
            .map(|i| Reservation::active(range(480 + i * 120, 540 + i * 120)))
            .collect();
        let query = AvailabilityQuery::new(range(480, 600));
        let result =
            check_availability(&query, &window(), &snapshot, 60, flat_price).unwrap();
        assert!(!result.available);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn find_alternatives_truncates_runs_to_requested_length() {
        let slots = generate_slots(&window(), &[], 60, flat_price).unwrap();
        let alts = find_alternatives(&slots, 120);
        assert!(!alts.is_empty());
        assert!(alts.iter().all(|a| a.duration() == 120));
        assert_eq!(alts[0].start(), 480);
    }

    #[test]
    fn one_alternative_per_maximal_run() {
        // one blocker splits the day into two free runs: exactly two proposals
        let snapshot = vec![Reservation::active(range(600, 660))];
        let slots = generate_slots(&window(), &snapshot, 60, flat_price).unwrap();
        let alts = find_alternatives(&slots, 120);
        assert_eq!(alts, vec![range(480, 600), range(660, 780)]);
    }

    #[test]
    fn find_alternatives_on_all_busy_day_is_empty() {
        let snapshot = vec![Reservation::active(range(480, 1320))];
        let slots = generate_slots(&window(), &snapshot, 60, flat_price).unwrap();
        assert!(find_alternatives(&slots, 60).is_empty());
    }
}
