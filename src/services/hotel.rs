//! Hotel services - Elenco hotel e dettaglio con camere
//!
//! Ogni operazione verifica prima il diritto dell'utente, poi legge i dati.
//! Qualunque errore interrompe l'intera operazione, senza retry.

use super::entitlement::check_entitlement;
use crate::core::{AppError, AppState, AuthenticatedUser, HotelAccessError};
use crate::dtos::{HotelDTO, HotelWithRoomsDTO};
use crate::entities::{Hotel, HotelWithRooms};
use crate::repositories::{HotelDataAccess, Store};
use axum::{
    Extension,
    extract::{Json, Path, State, rejection::PathRejection},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Esito della lettura dell'elenco hotel.
///
/// Un elenco vuoto vale come assenza. Un errore dello storage diventa `NotFound`
/// se `mask_storage_faults` è attivo, altrimenti resta un errore di storage.
fn listing_outcome(
    listing: Result<Vec<Hotel>, sqlx::Error>,
    mask_storage_faults: bool,
) -> Result<Vec<Hotel>, HotelAccessError> {
    match listing {
        Ok(hotels) if hotels.is_empty() => {
            warn!("No hotels available");
            Err(HotelAccessError::NotFound)
        }
        Ok(hotels) => Ok(hotels),
        Err(e) if mask_storage_faults => {
            warn!("Storage error while listing hotels, reported as not found: {}", e);
            Err(HotelAccessError::NotFound)
        }
        Err(e) => Err(HotelAccessError::Storage(e)),
    }
}

/// Elenco di tutti gli hotel, nell'ordine restituito dallo storage
#[instrument(skip(store))]
pub async fn list_hotels<D: HotelDataAccess>(
    store: &D,
    user_id: i32,
    mask_storage_faults: bool,
) -> Result<Vec<Hotel>, HotelAccessError> {
    check_entitlement(store, user_id).await?;
    let hotels = listing_outcome(store.list_hotels().await, mask_storage_faults)?;
    info!("Retrieved {} hotels", hotels.len());
    Ok(hotels)
}

/// Hotel con le sue camere. Un hotel senza camere è un risultato valido.
/// Un id fuori dal range delle chiavi (i32) non può corrispondere a nessun hotel.
#[instrument(skip(store))]
pub async fn get_hotel_with_rooms<D: HotelDataAccess>(
    store: &D,
    hotel_id: i64,
    user_id: i32,
) -> Result<HotelWithRooms, HotelAccessError> {
    check_entitlement(store, user_id).await?;
    let Ok(hotel_id) = i32::try_from(hotel_id) else {
        warn!("Hotel id out of key range");
        return Err(HotelAccessError::NotFound);
    };
    let hotel = store.find_hotel_with_rooms(hotel_id).await?.ok_or_else(|| {
        warn!("Hotel not found");
        HotelAccessError::NotFound
    })?;
    info!("Retrieved hotel with {} rooms", hotel.rooms.len());
    Ok(hotel)
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn get_hotels<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current_user): Extension<AuthenticatedUser>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<Vec<HotelDTO>>, AppError> {
    debug!("Listing hotels for user");
    let hotels = list_hotels(&state.store, current_user.user_id, state.mask_storage_faults).await?;
    Ok(Json(hotels.into_iter().map(HotelDTO::from).collect()))
}

#[instrument(skip(state, current_user, hotel_id), fields(user_id = %current_user.user_id))]
pub async fn get_hotel_by_id<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current_user): Extension<AuthenticatedUser>,
    hotel_id: Result<Path<i64>, PathRejection>, // parametro dalla URL /hotels/{hotel_id}
) -> Result<Json<HotelWithRoomsDTO>, AppError> {
    let Path(hotel_id) = hotel_id.map_err(|rejection| {
        warn!("Invalid hotel id in path: {}", rejection.body_text());
        AppError::bad_request("Invalid hotel id").with_details(rejection.body_text())
    })?;

    debug!("Fetching hotel {} with rooms", hotel_id);
    let hotel = get_hotel_with_rooms(&state.store, hotel_id, current_user.user_id).await?;
    Ok(Json(HotelWithRoomsDTO::from(hotel)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Room, TicketStatus};
    use crate::repositories::MemoryStore;
    use crate::services::entitlement::tests::{USER_ID, store_with_ticket};
    use chrono::{TimeZone, Utc};

    fn hotel(id: i32) -> Hotel {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Hotel {
            id,
            name: format!("Hotel {id}"),
            image: format!("https://img.example/{id}.jpg"),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn room(id: i32, hotel_id: i32) -> Room {
        let ts = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        Room {
            id,
            name: format!("{id}"),
            capacity: 2,
            hotel_id,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn entitled_store() -> MemoryStore {
        store_with_ticket(TicketStatus::Paid, false, true)
    }

    #[tokio::test]
    async fn test_list_hotels_returns_storage_order() {
        let mut store = entitled_store();
        store.add_hotel(hotel(2)).add_hotel(hotel(1));

        let hotels = list_hotels(&store, USER_ID, true).await.unwrap();
        let ids: Vec<i32> = hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_list_hotels_empty_is_not_found() {
        let result = list_hotels(&entitled_store(), USER_ID, true).await;
        assert!(matches!(result, Err(HotelAccessError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_hotels_checks_entitlement_first() {
        let mut store = store_with_ticket(TicketStatus::Reserved, false, true);
        store.add_hotel(hotel(1));

        let result = list_hotels(&store, USER_ID, true).await;
        assert!(matches!(result, Err(HotelAccessError::PaymentRequired)));
    }

    #[test]
    fn test_listing_fault_masking() {
        let masked = listing_outcome(Err(sqlx::Error::PoolTimedOut), true);
        assert!(matches!(masked, Err(HotelAccessError::NotFound)));

        let surfaced = listing_outcome(Err(sqlx::Error::PoolTimedOut), false);
        assert!(matches!(surfaced, Err(HotelAccessError::Storage(_))));
    }

    #[tokio::test]
    async fn test_hotel_with_rooms() {
        let mut store = entitled_store();
        store
            .add_hotel(hotel(1))
            .add_hotel(hotel(2))
            .add_room(room(1, 1))
            .add_room(room(2, 2))
            .add_room(room(3, 1));

        let result = get_hotel_with_rooms(&store, 1, USER_ID).await.unwrap();
        assert_eq!(result.hotel.id, 1);
        let mut room_ids: Vec<i32> = result.rooms.iter().map(|r| r.id).collect();
        room_ids.sort();
        assert_eq!(room_ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_hotel_without_rooms_is_found() {
        let mut store = entitled_store();
        store.add_hotel(hotel(5));

        let result = get_hotel_with_rooms(&store, 5, USER_ID).await.unwrap();
        assert!(result.rooms.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_hotel_is_not_found() {
        let mut store = entitled_store();
        store.add_hotel(hotel(5));

        let result = get_hotel_with_rooms(&store, 999_999, USER_ID).await;
        assert!(matches!(result, Err(HotelAccessError::NotFound)));
    }

    #[tokio::test]
    async fn test_hotel_id_beyond_key_range() {
        let mut store = entitled_store();
        store.add_hotel(hotel(1));

        let result = get_hotel_with_rooms(&store, i64::from(i32::MAX) + 1, USER_ID).await;
        assert!(matches!(result, Err(HotelAccessError::NotFound)));

        // il controllo del ticket resta il primo
        let mut unpaid = store_with_ticket(TicketStatus::Reserved, false, true);
        unpaid.add_hotel(hotel(1));
        let result = get_hotel_with_rooms(&unpaid, i64::from(i32::MAX) + 1, USER_ID).await;
        assert!(matches!(result, Err(HotelAccessError::PaymentRequired)));
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let mut store = entitled_store();
        store.add_hotel(hotel(1)).add_room(room(1, 1));

        let first = get_hotel_with_rooms(&store, 1, USER_ID).await.unwrap();
        let second = get_hotel_with_rooms(&store, 1, USER_ID).await.unwrap();
        assert_eq!(first, second);
    }
}
