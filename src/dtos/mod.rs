//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod hotel;
pub mod timestamp;

// Re-exports per facilitare l'import
pub use hotel::{HotelDTO, HotelWithRoomsDTO, RoomDTO};
