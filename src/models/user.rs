//! User model

use sqlx::FromRow;

/// The user credited as creator of seeded problems
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Organizer {
    pub id: String,
    pub username: String,
    pub email: String,
}
