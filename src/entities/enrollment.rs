//! Enrollment entity - Iscrizione di un utente all'evento

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
}
