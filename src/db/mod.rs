/// Database module for boardwise
///
/// SQLite snapshot store: holds boards as the board service last exported
/// them and hands them back as snapshots for analysis.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
