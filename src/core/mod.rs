//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione (JWT + sessioni)
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthenticatedUser, Claims, authenticate, authentication_middleware, decode_jwt, encode_jwt};
pub use config::Config;
pub use error::{AppError, HotelAccessError};
pub use state::AppState;
