//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le query di una singola tabella; `MySqlStore` li compone
//! e implementa i trait di accesso ai dati usati da services e middleware.
//! `MemoryStore` offre le stesse semantiche senza database, per i test.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano sqlx::query_as::<_, T>() con #[derive(sqlx::FromRow)] sulle entità,
   quindi non serve un database attivo in fase di compilazione.
   Metodo da usare in base al numero di righe attese:
     .fetch_optional(...) -> Option<T>  (righe extra ignorate)
     .fetch_all(...)      -> Vec<T>
   L'errore sqlx viene sempre propagato con `?` fino al service, che decide come mapparlo.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod enrollment;
pub mod hotel;
pub mod memory;
pub mod room;
pub mod session;
pub mod ticket;
pub mod traits;

pub use traits::{HotelDataAccess, Read, ReadAll, SessionStore, Store};

pub use enrollment::EnrollmentRepository;
pub use hotel::HotelRepository;
pub use memory::MemoryStore;
pub use room::RoomRepository;
pub use session::SessionRepository;
pub use ticket::TicketRepository;

use crate::entities::{Enrollment, Hotel, HotelWithRooms, Session, TicketWithType};
use sqlx::{Error, MySqlPool};

/// Storage MySQL: un repository per tabella, tutti sullo stesso pool
pub struct MySqlStore {
    pub enrollment: EnrollmentRepository,
    pub ticket: TicketRepository,
    pub hotel: HotelRepository,
    pub room: RoomRepository,
    pub session: SessionRepository,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            enrollment: EnrollmentRepository::new(pool.clone()),
            ticket: TicketRepository::new(pool.clone()),
            hotel: HotelRepository::new(pool.clone()),
            room: RoomRepository::new(pool.clone()),
            session: SessionRepository::new(pool),
        }
    }
}

impl HotelDataAccess for MySqlStore {
    async fn find_enrollment_by_user(&self, user_id: i32) -> Result<Option<Enrollment>, Error> {
        self.enrollment.find_by_user_id(user_id).await
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, Error> {
        self.ticket.find_by_enrollment_id(enrollment_id).await
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error> {
        self.hotel.read_all().await
    }

    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, Error> {
        // le camere si leggono solo se l'hotel esiste
        let Some(hotel) = self.hotel.read(&hotel_id).await? else {
            return Ok(None);
        };
        let rooms = self.room.find_many_by_hotel_id(hotel_id).await?;

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}

impl SessionStore for MySqlStore {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>, Error> {
        self.session.find_by_token(token).await
    }
}
