//! Outbound ports: interfaces the application layer calls out through
//!
//! [`BookingGateway`] decouples the booking service from the concrete
//! submission transport. The production implementation is the HTTP client
//! in `infrastructure::http`; tests and the demo binary use the in-memory
//! store, whose atomic check-and-insert plays the authoritative server.

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::DomainResult;

/// Authoritative booking submission.
///
/// A client-side availability result is only a pre-check; this call is
/// where the real accept/reject decision happens. A
/// [`DomainError::BookingConflict`](crate::domain::DomainError) from here
/// means the local snapshot was stale: re-fetch, re-validate, and let the
/// user decide. Never resubmit automatically.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> DomainResult<Booking>;
}
