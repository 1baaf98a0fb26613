//! RoomRepository - Repository per le camere

use crate::entities::Room;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

pub struct RoomRepository {
    connection_pool: MySqlPool,
}

impl RoomRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    pub async fn find_many_by_hotel_id(&self, hotel_id: i32) -> Result<Vec<Room>, Error> {
        debug!("Listing rooms of hotel");
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = ?
            ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rooms)
    }
}
