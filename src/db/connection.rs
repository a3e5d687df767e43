//! Database connection management

use sqlx::{Connection, MySqlConnection};

use crate::config::DatabaseConfig;

/// Open the single connection used for a seeding run
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection, sqlx::Error> {
    MySqlConnection::connect_with(&config.connect_options()).await
}

/// Verify the connection answers a trivial query
pub async fn test_connection(conn: &mut MySqlConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}
