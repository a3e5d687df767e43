//! User repository

use sqlx::MySqlConnection;

use crate::{error::AppResult, models::Organizer};

/// Repository for user lookups
pub struct UserRepository;

impl UserRepository {
    /// Find the organizer account by email
    pub async fn find_organizer_by_email(
        conn: &mut MySqlConnection,
        email: &str,
    ) -> AppResult<Option<Organizer>> {
        let organizer = sqlx::query_as::<_, Organizer>(
            r#"SELECT id, username, email FROM users WHERE email = ? LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(organizer)
    }
}
