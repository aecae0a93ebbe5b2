//! Field aggregate
//!
//! Operating hours and rates for a bookable field, plus the repository
//! interface for fetching them.

pub mod model;
pub mod repository;

pub use model::{FieldSchedule, OperatingWindow};
pub use repository::FieldScheduleRepository;
