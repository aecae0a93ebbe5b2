pub mod availability;
pub mod booking;
pub mod error;
pub mod field;
pub mod pricing;
pub mod reservation;
pub mod time_range;

// Re-export commonly used types
pub use availability::{
    aggregate, check_availability, find_alternatives, generate_slots, AvailabilityQuery,
    AvailabilityResult, SelectionSummary, Slot,
};
pub use booking::{Booking, BookingRequest};
pub use error::{DomainError, DomainResult};
pub use field::{FieldSchedule, FieldScheduleRepository, OperatingWindow};
pub use pricing::{Money, RateBand, RateCard};
pub use reservation::{Reservation, ReservationRepository, ReservationStatus};
pub use time_range::{format_hhmm, parse_hhmm, Minutes, TimeRange};
