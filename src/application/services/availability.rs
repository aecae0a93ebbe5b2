//! Availability service
//!
//! Orchestrates the repositories with the pure availability core: fetch the
//! field's static schedule and the reservation snapshot, then compute. The
//! computed result is advisory. Two clients can both see "available"
//! before either submits; the gateway settles it.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::availability::{check_availability, generate_slots, AvailabilityQuery};
use crate::domain::{
    AvailabilityResult, DomainError, DomainResult, FieldSchedule, FieldScheduleRepository,
    Reservation, ReservationRepository, Slot, TimeRange,
};
use crate::shared::retry::retry_with_backoff;

pub struct AvailabilityService {
    schedules: Arc<dyn FieldScheduleRepository>,
    reservations: Arc<dyn ReservationRepository>,
    config: Config,
}

impl AvailabilityService {
    pub fn new(
        schedules: Arc<dyn FieldScheduleRepository>,
        reservations: Arc<dyn ReservationRepository>,
        config: Config,
    ) -> Self {
        Self {
            schedules,
            reservations,
            config,
        }
    }

    /// Fetch the static field record, retrying transient failures.
    pub async fn field_schedule(&self, field_id: Uuid) -> DomainResult<FieldSchedule> {
        let schedule = retry_with_backoff(
            self.config.fetch_retry.clone(),
            || self.schedules.find_by_id(field_id),
            DomainError::is_transient,
            "fetch_field_schedule",
        )
        .await?;

        schedule.ok_or(DomainError::NotFound {
            entity: "Field",
            field: "id",
            value: field_id.to_string(),
        })
    }

    /// Fetch a fresh reservation snapshot, retrying transient failures.
    pub async fn snapshot(
        &self,
        field_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        retry_with_backoff(
            self.config.fetch_retry.clone(),
            || self.reservations.find_for_field_on_date(field_id, date),
            DomainError::is_transient,
            "fetch_reservations",
        )
        .await
    }

    /// The full bookable-slot grid for a field on a date.
    pub async fn day_schedule(&self, field_id: Uuid, date: NaiveDate) -> DomainResult<Vec<Slot>> {
        let schedule = self.field_schedule(field_id).await?;
        let snapshot = self.snapshot(field_id, date).await?;
        let slots = generate_slots(
            &schedule.operating,
            &snapshot,
            self.config.slot_duration_minutes,
            schedule.rates.pricer(),
        )?;
        info!(
            field = %schedule.name,
            %date,
            slots = slots.len(),
            free = slots.iter().filter(|s| s.available).count(),
            "day schedule computed"
        );
        Ok(slots)
    }

    /// Check one requested range against a fresh snapshot.
    pub async fn check(
        &self,
        field_id: Uuid,
        date: NaiveDate,
        range: TimeRange,
    ) -> DomainResult<AvailabilityResult> {
        let schedule = self.field_schedule(field_id).await?;
        let snapshot = self.snapshot(field_id, date).await?;
        let result = check_availability(
            &AvailabilityQuery::new(range),
            &schedule.operating,
            &snapshot,
            self.config.slot_duration_minutes,
            schedule.rates.pricer(),
        )?;
        info!(
            field = %schedule.name,
            %date,
            requested = %range,
            available = result.available,
            conflicts = result.conflicts.len(),
            "availability checked"
        );
        Ok(result)
    }
}

// ── Tests ──────────────────────────────────────────────────────
