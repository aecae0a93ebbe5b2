//! Wire DTOs for the marketplace REST API
//!
//! The backend ships stringly-typed payloads: `"HH:mm"` times, free-form
//! status strings. Conversion into domain values happens here, once, and is
//! fallible: a payload that does not validate never reaches the
//! availability core.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    Booking, BookingRequest, DomainError, DomainResult, FieldSchedule, Money, OperatingWindow,
    RateCard, Reservation, ReservationStatus, TimeRange,
};

/// One reservation as returned by `GET /fields/{id}/reservations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationDto {
    pub id: Uuid,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReservationDto> for Reservation {
    type Error = DomainError;

    fn try_from(dto: ReservationDto) -> DomainResult<Self> {
        let status = ReservationStatus::parse(&dto.status).ok_or_else(|| {
            DomainError::Validation(format!(
                "unknown reservation status {:?} for reservation {}",
                dto.status, dto.id
            ))
        })?;
        Ok(Reservation {
            id: dto.id,
            range: TimeRange::from_hhmm(&dto.start_time, &dto.end_time)?,
            status,
            created_at: dto.created_at,
        })
    }
}

/// Time-of-day rate override as served with the field schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct RateBandDto {
    pub from: String,
    pub to: String,
    pub hourly_rate: Money,
}

/// Static field record from `GET /fields/{id}/schedule`.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldScheduleDto {
    pub id: Uuid,
    pub name: String,
    pub opens_at: String,
    pub closes_at: String,
    pub hourly_rate: Money,
    pub currency: String,
    #[serde(default)]
    pub peak_rates: Vec<RateBandDto>,
}

impl TryFrom<FieldScheduleDto> for FieldSchedule {
    type Error = DomainError;

    fn try_from(dto: FieldScheduleDto) -> DomainResult<Self> {
        let mut rates = RateCard::new(dto.hourly_rate, dto.currency);
        for band in dto.peak_rates {
            rates = rates.with_band(
                TimeRange::from_hhmm(&band.from, &band.to)?,
                band.hourly_rate,
            );
        }
        Ok(FieldSchedule::new(
            dto.id,
            dto.name,
            OperatingWindow::from_hhmm(&dto.opens_at, &dto.closes_at)?,
            rates,
        ))
    }
}

/// One requested or confirmed time range on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRangeDto {
    pub start_time: String,
    pub end_time: String,
}

impl From<&TimeRange> for SlotRangeDto {
    fn from(range: &TimeRange) -> Self {
        use crate::domain::format_hhmm;
        Self {
            start_time: format_hhmm(range.start()),
            end_time: format_hhmm(range.end()),
        }
    }
}

impl TryFrom<&SlotRangeDto> for TimeRange {
    type Error = DomainError;

    fn try_from(dto: &SlotRangeDto) -> DomainResult<Self> {
        TimeRange::from_hhmm(&dto.start_time, &dto.end_time)
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateBookingDto {
    pub field_id: Uuid,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub slots: Vec<SlotRangeDto>,
    #[validate(range(min = 1))]
    pub participant_count: u32,
}

impl From<&BookingRequest> for CreateBookingDto {
    fn from(request: &BookingRequest) -> Self {
        Self {
            field_id: request.field_id,
            date: request.date,
            slots: request.ranges.iter().map(SlotRangeDto::from).collect(),
            participant_count: request.participant_count,
        }
    }
}

/// Confirmed booking in the submit response.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingDto {
    pub id: Uuid,
    pub field_id: Uuid,
    pub date: NaiveDate,
    pub slots: Vec<SlotRangeDto>,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingDto> for Booking {
    type Error = DomainError;

    fn try_from(dto: BookingDto) -> DomainResult<Self> {
        let ranges = dto
            .slots
            .iter()
            .map(TimeRange::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Booking {
            id: dto.id,
            field_id: dto.field_id,
            date: dto.date,
            ranges,
            total_price: dto.total_price,
            created_at: dto.created_at,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────
