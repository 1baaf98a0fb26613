//! MemoryStore - Implementazione in memoria dell'accesso ai dati, per i test
//!
//! Stesse semantiche di `MySqlStore`: prima iscrizione vince, ticket senza
//! TicketType non trovato, hotel in ordine di inserimento. Si popola prima di
//! condividerlo nello stato; `failing()` simula un database irraggiungibile.
//! Il binario usa sempre `MySqlStore`.

use super::{HotelDataAccess, SessionStore};
use crate::entities::{
    Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketType, TicketWithType,
};
use sqlx::Error;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    ticket_types: Vec<TicketType>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    sessions: Vec<Session>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ogni lookup risponde con `PoolClosed`
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn add_enrollment(&mut self, enrollment: Enrollment) -> &mut Self {
        self.enrollments.push(enrollment);
        self
    }

    pub fn add_ticket(&mut self, ticket: Ticket) -> &mut Self {
        self.tickets.push(ticket);
        self
    }

    pub fn add_ticket_type(&mut self, ticket_type: TicketType) -> &mut Self {
        self.ticket_types.push(ticket_type);
        self
    }

    pub fn add_hotel(&mut self, hotel: Hotel) -> &mut Self {
        self.hotels.push(hotel);
        self
    }

    pub fn add_room(&mut self, room: Room) -> &mut Self {
        self.rooms.push(room);
        self
    }

    pub fn add_session(&mut self, session: Session) -> &mut Self {
        self.sessions.push(session);
        self
    }

    fn check_available(&self) -> Result<(), Error> {
        if self.failing {
            Err(Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

impl HotelDataAccess for MemoryStore {
    async fn find_enrollment_by_user(&self, user_id: i32) -> Result<Option<Enrollment>, Error> {
        self.check_available()?;
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, Error> {
        self.check_available()?;
        let Some(ticket) = self.tickets.iter().find(|t| t.enrollment_id == enrollment_id) else {
            return Ok(None);
        };
        let ticket_type = self
            .ticket_types
            .iter()
            .find(|tt| tt.id == ticket.ticket_type_id);

        Ok(ticket_type.map(|tt| TicketWithType {
            ticket: ticket.clone(),
            ticket_type: tt.clone(),
        }))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error> {
        self.check_available()?;
        Ok(self.hotels.clone())
    }

    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, Error> {
        self.check_available()?;
        let Some(hotel) = self.hotels.iter().find(|h| h.id == hotel_id) else {
            return Ok(None);
        };
        let rooms = self
            .rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();

        Ok(Some(HotelWithRooms {
            hotel: hotel.clone(),
            rooms,
        }))
    }
}

impl SessionStore for MemoryStore {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>, Error> {
        self.check_available()?;
        Ok(self.sessions.iter().find(|s| s.token == token).cloned())
    }
}
