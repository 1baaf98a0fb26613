//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene lo storage e la configurazione necessaria agli handler.
//! Viene costruito una volta all'avvio e condiviso tramite `Arc`.

use crate::repositories::Store;

/// Stato condiviso tra tutte le route e i middleware
pub struct AppState<S: Store> {
    /// Accesso ai dati (MySQL in produzione, in memoria nei test)
    pub store: S,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Se true, un errore dello storage durante l'elenco degli hotel
    /// viene riportato come NotFound invece che come errore interno
    pub mask_storage_faults: bool,
}

impl<S: Store> AppState<S> {
    /// Crea lo stato con il mascheramento degli errori di storage attivo
    ///
    /// # Arguments
    /// * `store` - Implementazione dell'accesso ai dati
    /// * `jwt_secret` - Chiave segreta per la verifica dei token JWT
    pub fn new(store: S, jwt_secret: String) -> Self {
        Self {
            store,
            jwt_secret,
            mask_storage_faults: true,
        }
    }

    pub fn with_storage_fault_masking(mut self, enabled: bool) -> Self {
        self.mask_storage_faults = enabled;
        self
    }
}
