//! judge-seed - Problem Catalog Seeder
//!
//! Inserts a fixed catalog of programming-contest problems and their test
//! cases into the judge's MySQL database. Problems are keyed by title, so
//! running the seeder repeatedly inserts each problem exactly once.
//!
//! # Architecture
//!
//! - **Catalog**: the embedded problem definitions and their validation
//! - **Services**: the seeding procedure
//! - **Repositories**: Database access
//! - **Models**: Rows written to the database

pub mod catalog;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::{SeedReport, SeedService};
