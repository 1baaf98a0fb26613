//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella; il servizio le legge soltanto, non le modifica mai.

pub mod enrollment;
pub mod enums;
pub mod hotel;
pub mod session;
pub mod ticket;

// Re-exports per facilitare l'import
pub use enrollment::Enrollment;
pub use enums::TicketStatus;
pub use hotel::{Hotel, HotelWithRooms, Room};
pub use session::Session;
pub use ticket::{Ticket, TicketType, TicketWithType};
