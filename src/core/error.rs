use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn payment_required(message: &'static str) -> Self {
        Self::new(StatusCode::PAYMENT_REQUIRED, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

/// Esiti negativi dell'accesso ai dati degli hotel.
///
/// Più cause distinte confluiscono volutamente nello stesso tipo: il dettaglio
/// resta nei log, al client arriva solo il tipo.
#[derive(Debug, Error)]
pub enum HotelAccessError {
    /// Nessuna iscrizione, nessun ticket, nessun hotel
    #[error("resource not found")]
    NotFound,
    /// Ticket non pagato, remoto o senza hotel incluso
    #[error("payment for the ticket required")]
    PaymentRequired,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<HotelAccessError> for AppError {
    fn from(err: HotelAccessError) -> Self {
        match err {
            HotelAccessError::NotFound => Self::not_found("Resource not found"),
            HotelAccessError::PaymentRequired => {
                Self::payment_required("Payment for the ticket required!")
            }
            HotelAccessError::Storage(e) => Self::from(e),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
