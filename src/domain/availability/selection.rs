//! Checkout selection aggregation
//!
//! The booking flow lets a user pick several slots, contiguous or not,
//! in one checkout. Aggregation is pure summation of the individually
//! quoted prices; fees and rounding belong to the payment collaborator.

use std::collections::HashSet;

use super::slots::Slot;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pricing::Money;
use crate::domain::time_range::Minutes;

/// Totals for a set of chosen slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub total_duration: Minutes,
    pub total_price: Money,
}

/// Sum duration and price over the chosen slots.
///
/// Selecting the same slot range twice is a caller bug and fails with
/// [`DomainError::DuplicateSelection`] rather than being silently deduped.
pub fn aggregate(selection: &[Slot]) -> DomainResult<SelectionSummary> {
    let mut seen = HashSet::new();
    let mut total_duration: Minutes = 0;
    let mut total_price = Money::ZERO;

    for slot in selection {
        if !seen.insert(slot.range) {
            return Err(DomainError::DuplicateSelection(slot.range));
        }
        total_duration += slot.range.duration();
        total_price += slot.price;
    }

    Ok(SelectionSummary {
        total_duration,
        total_price,
    })
}

// ── Tests ──────────────────────────────────────────────────────
