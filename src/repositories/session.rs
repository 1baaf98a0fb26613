//! SessionRepository - Sessioni aperte dal servizio di login

use crate::entities::Session;
use sqlx::{Error, MySqlPool};
use tracing::instrument;

pub struct SessionRepository {
    connection_pool: MySqlPool,
}

impl SessionRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    #[instrument(skip(self, token))]
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, Error> {
        sqlx::query_as::<_, Session>("SELECT id, user_id, token FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
