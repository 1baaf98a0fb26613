//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! `entitlement` contiene la regola di accesso ai dati degli hotel,
//! `hotel` le operazioni di lettura e i relativi handler.

pub mod entitlement;
pub mod hotel;

// Re-exports per facilitare l'import
pub use entitlement::{EntitlementVerdict, check_entitlement};
pub use hotel::{get_hotel_by_id, get_hotel_with_rooms, get_hotels, list_hotels};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
