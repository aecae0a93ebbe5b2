//! In-memory booking store
//!
//! Backs the repositories and the gateway for tests and the demo binary.
//! Because `submit` holds a write lock across the conflict test and the
//! insert, this store also plays the role of the authoritative server in
//! the stale-snapshot race: whoever submits first wins, the loser gets a
//! conflict.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::application::ports::BookingGateway;
use crate::domain::{
    Booking, BookingRequest, DomainError, DomainResult, FieldSchedule, FieldScheduleRepository,
    Money, Reservation, ReservationRepository,
};

type DayKey = (Uuid, NaiveDate);

pub struct InMemoryBookingStore {
    schedules: DashMap<Uuid, FieldSchedule>,
    reservations: DashMap<DayKey, Vec<Reservation>>,
    bookings: DashMap<Uuid, Booking>,
    // serializes submit's check-and-insert
    write_lock: Mutex<()>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            schedules: DashMap::new(),
            reservations: DashMap::new(),
            bookings: DashMap::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn add_field(&self, schedule: FieldSchedule) {
        self.schedules.insert(schedule.field_id, schedule);
    }

    /// Seed an existing reservation, bypassing conflict checks.
    pub fn seed_reservation(&self, field_id: Uuid, date: NaiveDate, reservation: Reservation) {
        self.reservations
            .entry((field_id, date))
            .or_default()
            .push(reservation);
    }

    pub fn booking(&self, id: Uuid) -> Option<Booking> {
        self.bookings.get(&id).map(|b| b.clone())
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FieldScheduleRepository for InMemoryBookingStore {
    async fn find_by_id(&self, field_id: Uuid) -> DomainResult<Option<FieldSchedule>> {
        Ok(self.schedules.get(&field_id).map(|s| s.clone()))
    }
}

#[async_trait]
impl ReservationRepository for InMemoryBookingStore {
    async fn find_for_field_on_date(
        &self,
        field_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .get(&(field_id, date))
            .map(|day| day.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl BookingGateway for InMemoryBookingStore {
    async fn submit(&self, request: &BookingRequest) -> DomainResult<Booking> {
        let _guard = self.write_lock.lock().await;

        let schedule = self
            .schedules
            .get(&request.field_id)
            .ok_or(DomainError::NotFound {
                entity: "Field",
                field: "id",
                value: request.field_id.to_string(),
            })?;

        for range in &request.ranges {
            if !schedule.operating.contains(range) {
                return Err(DomainError::Validation(format!(
                    "requested range {} is outside operating hours {}",
                    range, schedule.operating
                )));
            }
        }

        let key = (request.field_id, request.date);
        if let Some(day) = self.reservations.get(&key) {
            for reservation in day.iter().filter(|r| r.blocks()) {
                if let Some(range) = request
                    .ranges
                    .iter()
                    .find(|range| reservation.range.overlaps(range))
                {
                    return Err(DomainError::BookingConflict {
                        field_id: request.field_id,
                        reason: format!(
                            "range {} overlaps existing reservation {}",
                            range, reservation.range
                        ),
                    });
                }
            }
        }

        let total_price = request
            .ranges
            .iter()
            .map(|range| schedule.rates.price_for(range))
            .fold(Money::ZERO, |total, price| total + price);

        let mut day = self.reservations.entry(key).or_default();
        for range in &request.ranges {
            day.push(Reservation::active(*range));
        }
        drop(day);

        let booking = Booking {
            id: Uuid::new_v4(),
            field_id: request.field_id,
            date: request.date,
            ranges: request.ranges.clone(),
            total_price,
            created_at: Utc::now(),
        };
        self.bookings.insert(booking.id, booking.clone());
        info!(
            booking_id = %booking.id,
            field_id = %booking.field_id,
            date = %booking.date,
            total = %booking.total_price,
            "booking accepted"
        );
        Ok(booking)
    }
}

// ── Tests ──────────────────────────────────────────────────────
