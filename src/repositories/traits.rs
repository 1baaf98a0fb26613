//! Common repository traits
//!
//! This module defines the generic read interfaces used by the repositories and
//! the two data-access seams the rest of the server depends on.
//! All futures are `Send` so that generic axum handlers can await them.

use crate::entities::{Enrollment, HotelWithRooms, Hotel, Session, TicketWithType};
use std::future::Future;

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    fn read(&self, id: &Id) -> impl Future<Output = Result<Option<Entity>, sqlx::Error>> + Send;
}

/// Trait for reading every row of a table
pub trait ReadAll<Entity> {
    /// Reads all entities, in the order the database returns them
    fn read_all(&self) -> impl Future<Output = Result<Vec<Entity>, sqlx::Error>> + Send;
}

/// Record lookups needed to decide entitlement and serve hotel data.
///
/// Implementations only read: nothing here mutates hotel, ticket or enrollment state.
pub trait HotelDataAccess: Send + Sync {
    /// First enrollment of the user, if any
    fn find_enrollment_by_user(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<Enrollment>, sqlx::Error>> + Send;

    /// Ticket of the enrollment joined with its ticket type.
    /// A ticket whose type is missing is reported as `None`.
    fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> impl Future<Output = Result<Option<TicketWithType>, sqlx::Error>> + Send;

    fn list_hotels(&self) -> impl Future<Output = Result<Vec<Hotel>, sqlx::Error>> + Send;

    fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> impl Future<Output = Result<Option<HotelWithRooms>, sqlx::Error>> + Send;
}

/// Session lookup used by the authentication middleware
pub trait SessionStore: Send + Sync {
    fn find_session_by_token(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<Session>, sqlx::Error>> + Send;
}

/// Everything the application state needs from its storage backend
pub trait Store: HotelDataAccess + SessionStore + 'static {}

impl<T> Store for T where T: HotelDataAccess + SessionStore + 'static {}
