//! Session entity - Sessione aperta al login, legata al token JWT emesso

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
}
