//! HTTP boundary
//!
//! Wire DTO shapes and the reqwest-backed adapter for the marketplace
//! backend.

pub mod client;
pub mod dto;

pub use client::HttpBookingApi;
