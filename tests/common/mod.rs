use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use hotels_server::core::AppState;
use hotels_server::entities::{
    Enrollment, Hotel, Room, Session, Ticket, TicketStatus, TicketType,
};
use hotels_server::repositories::MemoryStore;
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test
///
/// # Arguments
/// * `store` - Store in memoria già popolato
///
/// # Returns
/// Arc<AppState> configurato con il JWT secret di test
pub fn create_test_state(store: MemoryStore) -> Arc<AppState<MemoryStore>> {
    Arc::new(AppState::new(store, JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState<MemoryStore>>) -> TestServer {
    let app = hotels_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing, valido per 24 ore
pub fn create_test_jwt(user_id: i32, jwt_secret: &str) -> String {
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        user_id: i32,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        user_id,
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Registra una sessione per l'utente e ne restituisce il token
pub fn login(store: &mut MemoryStore, user_id: i32) -> String {
    let token = create_test_jwt(user_id, JWT_SECRET);
    store.add_session(Session {
        id: user_id,
        user_id,
        token: token.clone(),
    });
    token
}

/// Iscrive l'utente e gli assegna un ticket del tipo indicato
pub fn enroll_with_ticket(
    store: &mut MemoryStore,
    user_id: i32,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) {
    let enrollment_id = user_id * 10;
    let ticket_type_id = user_id * 100;
    store
        .add_enrollment(Enrollment {
            id: enrollment_id,
            user_id,
        })
        .add_ticket_type(TicketType {
            id: ticket_type_id,
            name: "Ticket".to_string(),
            price: 300,
            is_remote,
            includes_hotel,
        })
        .add_ticket(Ticket {
            id: user_id * 1000,
            enrollment_id,
            ticket_type_id,
            status,
        });
}

pub fn hotel(id: i32) -> Hotel {
    let created = Utc.with_ymd_and_hms(2024, 2, 10, 9, 15, 30).unwrap();
    Hotel {
        id,
        name: format!("Hotel {id}"),
        image: format!("https://images.example/hotels/{id}.jpg"),
        created_at: created,
        updated_at: created,
    }
}

pub fn room(id: i32, hotel_id: i32, capacity: i32) -> Room {
    let created = Utc.with_ymd_and_hms(2024, 2, 11, 18, 0, 0).unwrap();
    Room {
        id,
        name: format!("{}", 100 + id),
        capacity,
        hotel_id,
        created_at: created,
        updated_at: created,
    }
}

/// Verifica il formato `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn is_iso_millis(value: &serde_json::Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let bytes = s.as_bytes();
    bytes.len() == 24
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
        && bytes[19] == b'.'
        && bytes[23] == b'Z'
        && chrono::DateTime::parse_from_rfc3339(s).is_ok()
}
