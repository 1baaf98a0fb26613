//! Hotel entities - Hotel e camere, in sola lettura

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hotel con tutte le sue camere (eventualmente nessuna)
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
