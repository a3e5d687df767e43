//! Application-wide constants
//!
//! Fallback values used when the corresponding environment variable is unset,
//! plus the column values the judge schema expects.

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default database user
pub const DEFAULT_DB_USER: &str = "admin";

/// Default database password
pub const DEFAULT_DB_PASS: &str = "";

/// Default database (schema) name
pub const DEFAULT_DB_NAME: &str = "quantum_judge";

// =============================================================================
// SEEDING DEFAULTS
// =============================================================================

/// Email of the user credited as creator of seeded problems
pub const DEFAULT_ORGANIZER_EMAIL: &str = "admin@gmail.com";

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "judge_seed=info,sqlx=warn";

// =============================================================================
// CATALOG LIMITS
// =============================================================================

/// Maximum problem title length (matches the `problems.title` column)
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Access types
pub mod access {
    pub const PUBLIC: &str = "PUBLIC";
    pub const PRIVATE: &str = "PRIVATE";
}
