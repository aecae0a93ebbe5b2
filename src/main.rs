//! Arena Booking demo entry point
//!
//! Walks the availability flow end to end against the in-memory store (or
//! the marketplace API when `[api] base_url` is configured): day grid,
//! conflicting query with alternative proposals, checkout aggregation,
//! submission, and the stale-snapshot conflict path.
//! Reads configuration from TOML file (~/.config/arena-booking/config.toml).

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use arena_booking::application::{AvailabilityService, BookingOutcome, BookingService};
use arena_booking::domain::{
    aggregate, BookingRequest, FieldSchedule, OperatingWindow, RateCard, Reservation, TimeRange,
};
use arena_booking::infrastructure::{HttpBookingApi, InMemoryBookingStore};
use arena_booking::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("ARENA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    let config = app_cfg.core();
    let date = Utc::now().date_naive();

    // ── Wire services against the configured backend ───────────
    if let Some(base_url) = &app_cfg.api.base_url {
        info!(%base_url, "using marketplace API backend");
        let field_id = match std::env::var("ARENA_FIELD_ID") {
            Ok(raw) => raw.parse::<Uuid>()?,
            Err(_) => {
                warn!("ARENA_FIELD_ID not set; nothing to query against the API");
                return Ok(());
            }
        };
        let api = Arc::new(HttpBookingApi::new(base_url));
        let availability = Arc::new(AvailabilityService::new(api.clone(), api.clone(), config));
        let booking = BookingService::new(availability.clone(), api);
        return run_demo(availability, booking, field_id, date).await;
    }

    // ── In-memory backend, seeded like a typical field ─────────
    let store = Arc::new(InMemoryBookingStore::new());
    let field_id = Uuid::new_v4();
    store.add_field(FieldSchedule::new(
        field_id,
        "Center Court",
        OperatingWindow::from_hhmm("08:00", "22:00")?,
        RateCard::new(Decimal::from(100), "EUR")
            .with_band(TimeRange::from_hhmm("17:00", "22:00")?, Decimal::from(120)),
    ));
    store.seed_reservation(
        field_id,
        date,
        Reservation::active(TimeRange::from_hhmm("10:00", "11:00")?),
    );
    store.seed_reservation(
        field_id,
        date,
        Reservation::cancelled(TimeRange::from_hhmm("12:00", "13:00")?),
    );

    let availability = Arc::new(AvailabilityService::new(
        store.clone(),
        store.clone(),
        config,
    ));
    let booking = BookingService::new(availability.clone(), store);
    run_demo(availability, booking, field_id, date).await
}

async fn run_demo(
    availability: Arc<AvailabilityService>,
    booking: BookingService,
    field_id: Uuid,
    date: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    // ── Day grid ───────────────────────────────────────────────
    let slots = availability.day_schedule(field_id, date).await?;
    for slot in &slots {
        info!(slot = %slot.range, available = slot.available, price = %slot.price, "slot");
    }

    // ── A request that collides with an existing reservation ───
    let wanted = TimeRange::from_hhmm("10:00", "12:00")?;
    let result = availability.check(field_id, date, wanted).await?;
    info!(requested = %wanted, available = result.available, conflicts = result.conflicts.len(), "pre-check");
    for alternative in &result.alternatives {
        info!(%alternative, "free window of the requested length");
    }

    // ── Checkout totals over two afternoon slots ───────────────
    let afternoon = TimeRange::from_hhmm("14:00", "16:00")?;
    let selection: Vec<_> = slots
        .iter()
        .filter(|slot| afternoon.contains(&slot.range))
        .cloned()
        .collect();
    let summary = aggregate(&selection)?;
    info!(
        total_duration = summary.total_duration,
        total_price = %summary.total_price,
        "selection aggregated"
    );

    // ── Submit, then resubmit the same range ───────────────────
    let request = BookingRequest::new(field_id, date, vec![afternoon], 4);
    match booking.book(request.clone()).await? {
        BookingOutcome::Confirmed(confirmed) => {
            info!(booking_id = %confirmed.id, total = %confirmed.total_price, "booked");
        }
        BookingOutcome::Rejected { result } => {
            warn!(conflicts = result.conflicts.len(), "booking rejected");
        }
    }

    // the range is taken now, so this one is rejected with alternatives
    match booking.book(request).await? {
        BookingOutcome::Confirmed(confirmed) => {
            warn!(booking_id = %confirmed.id, "unexpectedly confirmed twice");
        }
        BookingOutcome::Rejected { result } => {
            info!(
                conflicts = result.conflicts.len(),
                alternatives = result.alternatives.len(),
                "resubmission rejected against fresh snapshot"
            );
        }
    }

    Ok(())
}
