//! Hotel DTOs - Rappresentazione JSON di hotel e camere

use crate::entities::{Hotel, HotelWithRooms, Room};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelDTO {
    pub id: i32,
    pub name: String,
    pub image: String,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDTO {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomDTO {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDTO {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Hotel con le camere annidate sotto la chiave `Rooms`
#[derive(Serialize, Debug, Clone)]
pub struct HotelWithRoomsDTO {
    #[serde(flatten)]
    pub hotel: HotelDTO,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDTO>,
}

impl From<HotelWithRooms> for HotelWithRoomsDTO {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: HotelDTO::from(value.hotel),
            rooms: value.rooms.into_iter().map(RoomDTO::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_hotel() -> Hotel {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        Hotel {
            id: 7,
            name: "Grand Budapest".to_string(),
            image: "https://img.example/7.png".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_hotel_dto_uses_camel_case_and_millis() {
        let json = serde_json::to_value(HotelDTO::from(sample_hotel())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00.000Z");
        assert_eq!(json["updatedAt"], "2024-01-15T10:30:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_hotel_with_rooms_embeds_rooms_key() {
        let hotel = sample_hotel();
        let room = Room {
            id: 1,
            name: "101".to_string(),
            capacity: 3,
            hotel_id: hotel.id,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        };
        let dto = HotelWithRoomsDTO::from(HotelWithRooms {
            hotel,
            rooms: vec![room],
        });
        let json = serde_json::to_value(dto).unwrap();

        assert_eq!(json["name"], "Grand Budapest");
        let rooms = json["Rooms"].as_array().expect("Rooms deve essere un array");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0]["hotelId"], 7);
        assert_eq!(rooms[0]["capacity"], 3);
    }
}
