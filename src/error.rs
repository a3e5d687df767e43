//! Custom error types and handling
//!
//! Every failure aborts the run. The binary logs the error and exits nonzero.

use crate::config::ConfigError;

/// Seeder-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Organizer (email: {0}) not found. Create the user first.")]
    OrganizerNotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OrganizerNotFound(_) => "ORGANIZER_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Catalog(_) => "CATALOG_ERROR",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => AppError::Database(db_err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organizer_not_found_message() {
        let err = AppError::OrganizerNotFound("admin@gmail.com".to_string());
        assert_eq!(
            err.to_string(),
            "Organizer (email: admin@gmail.com) not found. Create the user first."
        );
        assert_eq!(err.error_code(), "ORGANIZER_NOT_FOUND");
    }

    #[test]
    fn test_sqlx_errors_map_to_database() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_config_errors_map_to_configuration() {
        let err: AppError = ConfigError::InvalidValue("DB_PORT".to_string()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("DB_PORT"));
    }
}
