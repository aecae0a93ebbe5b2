//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::model::Reservation;
use crate::domain::DomainResult;

/// Read access to the reservations of a field.
///
/// Implementations fetch from the authoritative marketplace backend; the
/// returned vector is a point-in-time snapshot and availability computed
/// from it is advisory. Transport failures surface as
/// [`DomainError::DataUnavailable`](crate::domain::DomainError), which the
/// caller may retry with backoff.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations (any status) for a field on a calendar date.
    async fn find_for_field_on_date(
        &self,
        field_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;
}
