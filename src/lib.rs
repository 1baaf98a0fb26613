//! Hotels server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, auth, config};
pub use repositories::{MemoryStore, MySqlStore, Store};
pub use services::root;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router<S: Store>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/hotels", configure_hotel_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes degli hotel, tutte dietro autenticazione
fn configure_hotel_routes<S: Store>(state: Arc<AppState<S>>) -> Router<Arc<AppState<S>>> {
    use crate::core::authentication_middleware;
    use crate::services::{get_hotel_by_id, get_hotels};

    Router::new()
        .route("/", get(get_hotels::<S>))
        .route("/{hotel_id}", get(get_hotel_by_id::<S>))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware::<S>,
        ))
}
