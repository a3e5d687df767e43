//! Database module
//!
//! This module handles the database connection, repositories, and the
//! storage seam used by the seeder.

pub mod connection;
pub mod repositories;
pub mod store;

pub use connection::*;
pub use store::{MySqlStore, SeedStore};
