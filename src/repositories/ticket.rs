//! TicketRepository - Repository per i ticket e il relativo TicketType

use crate::entities::{Ticket, TicketStatus, TicketType, TicketWithType};
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

pub struct TicketRepository {
    connection_pool: MySqlPool,
}

/// Riga della JOIN tickets/ticket_types: le colonne del tipo sono rinominate
/// per evitare collisioni con quelle del ticket
#[derive(sqlx::FromRow)]
struct TicketJoinRow {
    id: i32,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
    type_name: String,
    type_price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<TicketJoinRow> for TicketWithType {
    fn from(row: TicketJoinRow) -> Self {
        Self {
            ticket: Ticket {
                id: row.id,
                enrollment_id: row.enrollment_id,
                ticket_type_id: row.ticket_type_id,
                status: row.status,
            },
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        }
    }
}

impl TicketRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// INNER JOIN: un ticket senza tipo non viene restituito
    #[instrument(skip(self), fields(enrollment_id = %enrollment_id))]
    pub async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, Error> {
        debug!("Finding ticket with type by enrollment id");
        let row = sqlx::query_as::<_, TicketJoinRow>(
            r#"
            SELECT
                t.id,
                t.enrollment_id,
                t.ticket_type_id,
                t.status,
                tt.name AS type_name,
                tt.price AS type_price,
                tt.is_remote,
                tt.includes_hotel
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = ?
            ORDER BY t.id
            LIMIT 1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row.map(TicketWithType::from))
    }
}
