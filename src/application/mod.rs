//! Application layer
//!
//! Services that orchestrate repository fetches with the pure availability
//! core, and the outbound ports they call through.

pub mod ports;
pub mod services;

pub use ports::BookingGateway;
pub use services::{AvailabilityService, BookingOutcome, BookingService};
