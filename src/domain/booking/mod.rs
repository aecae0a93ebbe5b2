//! Booking aggregate
//!
//! Request and confirmation entities for booking submission. The
//! authoritative accept/reject decision lives behind the outbound gateway
//! port, not here.

pub mod model;

pub use model::{Booking, BookingRequest};
