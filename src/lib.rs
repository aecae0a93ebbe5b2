//! # Arena Booking Core
//!
//! Availability computation and booking pre-check for a sports-facility
//! booking marketplace: slot generation over a field's operating hours,
//! conflict detection against reservation snapshots, alternative-window
//! proposals and checkout aggregation.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core value types, entities, repository traits and the pure
//!   availability computation
//! - **application**: Services orchestrating snapshot fetches with the pure
//!   core, and the outbound booking gateway port
//! - **infrastructure**: In-memory store (tests, demo, and the
//!   authoritative side of the concurrency story) and the HTTP adapter for
//!   the marketplace backend
//! - **shared**: Cross-cutting helpers (retry with backoff)
//!
//! Availability computed here is advisory: it reads a point-in-time
//! snapshot, and the server's check-and-insert at submission time is the
//! authoritative decision. On a submit conflict the services re-fetch and
//! re-validate; they never resubmit automatically.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig, Config};

// Re-export the service layer for easy access
pub use application::{AvailabilityService, BookingGateway, BookingOutcome, BookingService};

// Re-export core domain types
pub use domain::{
    aggregate, check_availability, generate_slots, AvailabilityQuery, AvailabilityResult, Booking,
    BookingRequest, DomainError, DomainResult, FieldSchedule, Money, OperatingWindow, RateCard,
    Reservation, ReservationStatus, SelectionSummary, Slot, TimeRange,
};

// Re-export boundary implementations
pub use infrastructure::{HttpBookingApi, InMemoryBookingStore};
