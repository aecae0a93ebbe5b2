pub mod outbound;

pub use outbound::BookingGateway;
