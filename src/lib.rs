/// boardwise library
///
/// Heuristic recommendations for task boards: suggested due dates, list
/// moves, related cards, overdue, undescribed and stale cards.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod recommend;
pub mod snapshot;

// Re-exports for convenience
pub use config::EngineConfig;
pub use db::Database;
pub use error::{BoardwiseError, Result};
pub use recommend::{Recommendation, RecommendationEngine};
