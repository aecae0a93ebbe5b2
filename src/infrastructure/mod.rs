//! Infrastructure layer
//!
//! Concrete implementations of the repository and gateway interfaces.

pub mod http;
pub mod memory;

pub use http::HttpBookingApi;
pub use memory::InMemoryBookingStore;
