//! Ticket entities - Ticket acquistato e relativo piano tariffario

use super::enums::TicketStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub ticket_type_id: i32,
    pub status: TicketStatus,
}

/// Piano tariffario: dati di riferimento condivisi tra più ticket
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Ticket insieme al suo TicketType, come restituito dalla lookup per enrollment.
/// Un ticket senza tipo non può esistere in questa forma.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}
