//! Booking service
//!
//! Pre-checks a request against a fresh snapshot, submits it through the
//! gateway, and handles the stale-snapshot race: a server conflict is
//! ground truth, so the service discards the old snapshot, re-validates
//! against new data and surfaces the recomputed result. The submission
//! itself is never retried automatically.

use std::sync::Arc;

use tracing::{info, warn};

use super::availability::AvailabilityService;
use crate::application::ports::BookingGateway;
use crate::domain::{
    AvailabilityResult, Booking, BookingRequest, DomainError, DomainResult,
};

/// Outcome of a booking attempt.
#[derive(Debug)]
pub enum BookingOutcome {
    Confirmed(Booking),
    /// The request was rejected, either by the local pre-check or by the
    /// authoritative server, together with the freshest availability view
    /// (conflicts and proposed alternatives).
    Rejected { result: AvailabilityResult },
}

pub struct BookingService {
    availability: Arc<AvailabilityService>,
    gateway: Arc<dyn BookingGateway>,
}

impl BookingService {
    pub fn new(availability: Arc<AvailabilityService>, gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            availability,
            gateway,
        }
    }

    pub async fn book(&self, request: BookingRequest) -> DomainResult<BookingOutcome> {
        request.validate()?;

        // advisory pre-check against a fresh snapshot: fail early with the
        // conflict list instead of a doomed round trip
        for range in &request.ranges {
            let result = self
                .availability
                .check(request.field_id, request.date, *range)
                .await?;
            if !result.available {
                info!(
                    field_id = %request.field_id,
                    requested = %range,
                    conflicts = result.conflicts.len(),
                    "booking rejected by pre-check"
                );
                return Ok(BookingOutcome::Rejected { result });
            }
        }

        match self.gateway.submit(&request).await {
            Ok(booking) => {
                info!(
                    booking_id = %booking.id,
                    field_id = %booking.field_id,
                    date = %booking.date,
                    ranges = booking.ranges.len(),
                    "booking confirmed"
                );
                Ok(BookingOutcome::Confirmed(booking))
            }
            Err(DomainError::BookingConflict { field_id, reason }) => {
                // the snapshot we pre-checked against was stale
                warn!(%field_id, %reason, "server rejected booking, revalidating with fresh data");
                let result = self.revalidate(&request).await?;
                Ok(BookingOutcome::Rejected { result })
            }
            Err(err) => Err(err),
        }
    }

    /// Re-fetch and re-validate after a server-side conflict. Returns the
    /// first range that now checks unavailable. If the conflicting booking
    /// vanished in the meantime, returns the fresh view of the first range
    /// so the caller can decide whether to resubmit.
    async fn revalidate(&self, request: &BookingRequest) -> DomainResult<AvailabilityResult> {
        let mut fallback = None;
        for range in &request.ranges {
            let result = self
                .availability
                .check(request.field_id, request.date, *range)
                .await?;
            if !result.available {
                return Ok(result);
            }
            fallback.get_or_insert(result);
        }
        Ok(fallback.unwrap_or(AvailabilityResult {
            available: true,
            conflicts: Vec::new(),
            alternatives: Vec::new(),
        }))
    }
}

// ── Tests ──────────────────────────────────────────────────────
