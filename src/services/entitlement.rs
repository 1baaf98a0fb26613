//! Entitlement - Diritto di un utente a vedere i dati degli hotel
//!
//! Catena di lookup: enrollment dell'utente -> ticket con TicketType -> regola.
//! Nessun effetto collaterale: legge solo lo stato corrente dello storage.

use crate::core::HotelAccessError;
use crate::entities::{TicketStatus, TicketWithType};
use crate::repositories::HotelDataAccess;
use tracing::{debug, info, instrument, warn};

/// Esito della regola sul ticket. Le varianti di rifiuto servono solo ai log:
/// verso il chiamante diventano tutte `PaymentRequired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementVerdict {
    Granted,
    TicketNotPaid,
    RemoteTicket,
    HotelNotIncluded,
}

impl EntitlementVerdict {
    pub fn evaluate(ticket: &TicketWithType) -> Self {
        if ticket.ticket.status != TicketStatus::Paid {
            Self::TicketNotPaid
        } else if ticket.ticket_type.is_remote {
            Self::RemoteTicket
        } else if !ticket.ticket_type.includes_hotel {
            Self::HotelNotIncluded
        } else {
            Self::Granted
        }
    }

    pub fn into_result(self) -> Result<(), HotelAccessError> {
        match self {
            Self::Granted => Ok(()),
            Self::TicketNotPaid | Self::RemoteTicket | Self::HotelNotIncluded => {
                Err(HotelAccessError::PaymentRequired)
            }
        }
    }
}

/// Verifica che l'utente possa vedere gli hotel.
///
/// # Returns
/// * `Ok(())` - ticket pagato, in presenza, con hotel incluso
/// * `Err(NotFound)` - nessuna iscrizione o nessun ticket
/// * `Err(PaymentRequired)` - la regola sul ticket non è soddisfatta
/// * `Err(Storage)` - errore dello storage durante i lookup
#[instrument(skip(store))]
pub async fn check_entitlement<D: HotelDataAccess>(
    store: &D,
    user_id: i32,
) -> Result<(), HotelAccessError> {
    // il lookup del ticket dipende dall'id dell'iscrizione: sequenziali
    let enrollment = store
        .find_enrollment_by_user(user_id)
        .await?
        .ok_or_else(|| {
            warn!("No enrollment for user");
            HotelAccessError::NotFound
        })?;

    debug!("Found enrollment {}", enrollment.id);

    let ticket = store
        .find_ticket_by_enrollment(enrollment.id)
        .await?
        .ok_or_else(|| {
            warn!("No ticket for enrollment {}", enrollment.id);
            HotelAccessError::NotFound
        })?;

    let verdict = EntitlementVerdict::evaluate(&ticket);
    if verdict == EntitlementVerdict::Granted {
        info!("Hotel access granted with ticket {}", ticket.ticket.id);
    } else {
        warn!("Hotel access refused for ticket {}: {:?}", ticket.ticket.id, verdict);
    }
    verdict.into_result()
}
