//! Autenticazione - JWT e sessioni
//!
//! Il middleware verifica il token e la sessione associata, poi inserisce
//! `AuthenticatedUser` nelle Extension della richiesta. Gli handler degli hotel
//! ricevono solo lo user id, non vedono mai il token.

use crate::core::{AppError, AppState};
use crate::repositories::Store;
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::HeaderMap, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub user_id: i32,
}

/// Utente verificato dal middleware, disponibile come `Extension`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

#[instrument(skip(secret))]
pub fn encode_jwt(user_id: i32, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let claim = Claims {
        iat: now.timestamp() as usize,
        exp: (now + expire).timestamp() as usize,
        user_id,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .inspect_err(|e| error!("Failed to encode JWT token: {:?}", e))
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .inspect_err(|e| debug!("Failed to decode JWT token: {:?}", e))
}

/// Estrae il token dall'header `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Missing authorization header");
            AppError::unauthorized("Please add the JWT token to the header")
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Invalid authorization header")
        })?;

    let mut parts = auth_header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => {
            warn!("Authorization header is not a bearer token");
            Err(AppError::unauthorized("Invalid authorization header"))
        }
    }
}

/// Verifica token e sessione: qualunque fallimento produce 401
#[instrument(skip(state, headers))]
pub async fn authenticate<S: Store>(
    state: &AppState<S>,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, AppError> {
    let token = bearer_token(headers)?;

    let token_data = decode_jwt(token, &state.jwt_secret).map_err(|_| {
        warn!("Failed to decode JWT token");
        AppError::unauthorized("Unable to decode token")
    })?;

    // il token deve corrispondere a una sessione ancora aperta
    let session = state.store.find_session_by_token(token).await?;
    if session.is_none() {
        warn!("No session for token of user {}", token_data.claims.user_id);
        return Err(AppError::unauthorized("You are not an authorized user"));
    }

    info!("User authenticated: {}", token_data.claims.user_id);
    Ok(AuthenticatedUser {
        user_id: token_data.claims.user_id,
    })
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let user = authenticate(&*state, req.headers()).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
