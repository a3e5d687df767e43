//! Domain models
//!
//! Rows written to (and read from) the judge database.

pub mod problem;
pub mod test_case;
pub mod user;

pub use problem::*;
pub use test_case::*;
pub use user::*;
