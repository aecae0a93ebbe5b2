//! Fixed-duration slot generation
//!
//! Partitions a field's operating window into an ordered, gapless,
//! non-overlapping sequence of bookable slots and marks each one against
//! the reservation snapshot. This is the single slot computation in the
//! system; every consumer (detail view, availability checker, admin
//! calendar) is a thin caller.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::field::OperatingWindow;
use crate::domain::pricing::Money;
use crate::domain::reservation::Reservation;
use crate::domain::time_range::{Minutes, TimeRange};

/// One bookable unit of time within the operating window.
///
/// Slots are derived fresh on every generation call and never persisted.
#[derive(Debug, Clone)]
pub struct Slot {
    pub range: TimeRange,
    pub available: bool,
    pub price: Money,
}

/// Partition the operating window into slots of `slot_duration` minutes.
///
/// The returned sequence is sorted ascending by start, contiguous
/// (`slots[i].range.end() == slots[i+1].range.start()`) and covers
/// `[opens_at, closes_at)` exactly. The final slot is truncated at closing
/// time rather than extending past it. A slot is available when no active
/// reservation overlaps it; boundary touches are not overlaps.
///
/// Pure and deterministic: identical inputs yield identical output.
pub fn generate_slots<F>(
    window: &OperatingWindow,
    reservations: &[Reservation],
    slot_duration: Minutes,
    pricing: F,
) -> DomainResult<Vec<Slot>>
where
    F: Fn(&TimeRange) -> Money,
{
    if slot_duration == 0 {
        return Err(DomainError::Validation(
            "slot duration must be positive".to_string(),
        ));
    }

    let mut slots = Vec::new();
    let mut start = window.opens_at();
    while start < window.closes_at() {
        let end = start.saturating_add(slot_duration).min(window.closes_at());
        let range = TimeRange::new(start, end)?;
        let available = reservations
            .iter()
            .all(|r| !r.blocks() || !r.range.overlaps(&range));
        let price = pricing(&range);
        slots.push(Slot {
            range,
            available,
            price,
        });
        start = end;
    }
    Ok(slots)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::new(start, end).unwrap()
    }

    fn window(opens: u32, closes: u32) -> OperatingWindow {
        OperatingWindow::new(opens, closes).unwrap()
    }

    fn flat_price(_: &TimeRange) -> Money {
        Decimal::from(100)
    }

    #[test]
    fn covers_window_gapless_and_sorted() {
        let slots = generate_slots(&window(480, 1320), &[], 60, flat_price).unwrap();
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0].range.start(), 480);
        assert_eq!(slots.last().unwrap().range.end(), 1320);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].range.end(), pair[1].range.start());
            assert!(pair[0].range.start() < pair[1].range.start());
        }
    }

    #[test]
    fn last_slot_is_truncated_at_closing() {
        // 08:00-09:30 with hourly slots: [08:00,09:00) then [09:00,09:30)
        let slots = generate_slots(&window(480, 570), &[], 60, flat_price).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].range, range(540, 570));
        assert_eq!(slots[1].range.duration(), 30);
    }

    #[test]
    fn active_reservation_marks_slot_unavailable() {
        let reservations = vec![Reservation::active(range(600, 660))];
        let slots = generate_slots(&window(480, 1320), &reservations, 60, flat_price).unwrap();
        for slot in &slots {
            let expected_free = slot.range != range(600, 660);
            assert_eq!(slot.available, expected_free, "slot {}", slot.range);
        }
    }

    #[test]
    fn cancelled_reservation_does_not_block() {
        let reservations = vec![Reservation::cancelled(range(600, 660))];
        let slots = generate_slots(&window(480, 1320), &reservations, 60, flat_price).unwrap();
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn reservation_ending_at_slot_start_does_not_block_it() {
        // half-open semantics: booking until 10:00 leaves [10:00,11:00) free
        let reservations = vec![Reservation::active(range(540, 600))];
        let slots = generate_slots(&window(480, 1320), &reservations, 60, flat_price).unwrap();
        let ten_to_eleven = slots.iter().find(|s| s.range == range(600, 660)).unwrap();
        assert!(ten_to_eleven.available);
        let nine_to_ten = slots.iter().find(|s| s.range == range(540, 600)).unwrap();
        assert!(!nine_to_ten.available);
    }

    #[test]
    fn reservation_straddling_slots_blocks_both() {
        let reservations = vec![Reservation::active(range(630, 690))];
        let slots = generate_slots(&window(480, 1320), &reservations, 60, flat_price).unwrap();
        let blocked: Vec<_> = slots.iter().filter(|s| !s.available).collect();
        assert_eq!(blocked.len(), 2);
        assert_eq!(blocked[0].range, range(600, 660));
        assert_eq!(blocked[1].range, range(660, 720));
    }

    #[test]
    fn pricing_function_is_applied_per_slot() {
        let slots = generate_slots(&window(480, 600), &[], 60, |r: &TimeRange| {
            Decimal::from(r.start())
        })
        .unwrap();
        assert_eq!(slots[0].price, Decimal::from(480));
        assert_eq!(slots[1].price, Decimal::from(540));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = generate_slots(&window(480, 1320), &[], 0, flat_price).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn generation_is_idempotent() {
        let reservations = vec![
            Reservation::active(range(600, 660)),
            Reservation::cancelled(range(720, 780)),
        ];
        let a = generate_slots(&window(480, 1320), &reservations, 90, flat_price).unwrap();
        let b = generate_slots(&window(480, 1320), &reservations, 90, flat_price).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.range, y.range);
            assert_eq!(x.available, y.available);
            assert_eq!(x.price, y.price);
        }
    }

    #[test]
    fn duration_longer_than_window_yields_single_truncated_slot() {
        let slots = generate_slots(&window(480, 570), &[], 240, flat_price).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].range, range(480, 570));
    }
}
