//! HTTP adapter for the marketplace backend
//!
//! Implements the repositories and the booking gateway against the REST
//! API. Transport and decode failures surface as `DataUnavailable` (the
//! caller owns retry policy); HTTP 409 on submit is the authoritative
//! conflict.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use super::dto::{BookingDto, CreateBookingDto, FieldScheduleDto, ReservationDto};
use crate::application::ports::BookingGateway;
use crate::domain::{
    Booking, BookingRequest, DomainError, DomainResult, FieldSchedule, FieldScheduleRepository,
    Reservation, ReservationRepository,
};

pub struct HttpBookingApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON payload; `Ok(None)` on 404.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DomainResult<Option<T>> {
        let url = self.url(path);
        debug!(%url, "fetching");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status().map_err(transport)?;
        let value = response.json().await.map_err(transport)?;
        Ok(Some(value))
    }
}

fn transport(err: reqwest::Error) -> DomainError {
    DomainError::DataUnavailable(err.to_string())
}

#[async_trait]
impl FieldScheduleRepository for HttpBookingApi {
    async fn find_by_id(&self, field_id: Uuid) -> DomainResult<Option<FieldSchedule>> {
        let dto: Option<FieldScheduleDto> = self
            .get_json(&format!("/api/v1/fields/{}/schedule", field_id))
            .await?;
        dto.map(FieldSchedule::try_from).transpose()
    }
}

#[async_trait]
impl ReservationRepository for HttpBookingApi {
    async fn find_for_field_on_date(
        &self,
        field_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let dtos: Option<Vec<ReservationDto>> = self
            .get_json(&format!(
                "/api/v1/fields/{}/reservations?date={}",
                field_id, date
            ))
            .await?;
        let dtos = dtos.ok_or(DomainError::NotFound {
            entity: "Field",
            field: "id",
            value: field_id.to_string(),
        })?;
        dtos.into_iter().map(Reservation::try_from).collect()
    }
}

#[async_trait]
impl BookingGateway for HttpBookingApi {
    async fn submit(&self, request: &BookingRequest) -> DomainResult<Booking> {
        let dto = CreateBookingDto::from(request);
        dto.validate()
            .map_err(|err| DomainError::Validation(err.to_string()))?;

        let response = self
            .http
            .post(self.url("/api/v1/bookings"))
            .json(&dto)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            let reason = response.text().await.unwrap_or_default();
            return Err(DomainError::BookingConflict {
                field_id: request.field_id,
                reason,
            });
        }
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::Validation(detail));
        }

        let response = response.error_for_status().map_err(transport)?;
        let dto: BookingDto = response.json().await.map_err(transport)?;
        Booking::try_from(dto)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpBookingApi::new("https://api.example.test/");
        assert_eq!(
            api.url("/api/v1/bookings"),
            "https://api.example.test/api/v1/bookings"
        );
    }
}
