//! EnrollmentRepository - Repository per le iscrizioni all'evento

use crate::entities::Enrollment;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

pub struct EnrollmentRepository {
    connection_pool: MySqlPool,
}

impl EnrollmentRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Prima iscrizione dell'utente (id più basso se ce ne fosse più di una)
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, Error> {
        debug!("Finding enrollment by user id");
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, user_id
            FROM enrollments
            WHERE user_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if enrollment.is_none() {
            debug!("No enrollment found");
        }

        Ok(enrollment)
    }
}
