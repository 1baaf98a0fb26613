//! HotelRepository - Repository per gli hotel

use super::{Read, ReadAll};
use crate::entities::Hotel;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

pub struct HotelRepository {
    connection_pool: MySqlPool,
}

impl HotelRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Hotel> for HotelRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Hotel>, Error> {
        debug!("Listing hotels");
        let hotels = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} hotels", hotels.len());
        Ok(hotels)
    }
}

impl Read<Hotel, i32> for HotelRepository {
    #[instrument(skip(self), fields(hotel_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Hotel>, Error> {
        debug!("Reading hotel by id");
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(hotel)
    }
}
