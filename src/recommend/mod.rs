/// Recommendation module
///
/// Heuristic analyzers that scan a board snapshot and suggest what to do next.

pub mod due_date;
pub mod engine;
pub mod list_movement;
pub mod missing_description;
pub mod overdue;
pub mod recommendation;
pub mod related_cards;
pub mod scorer;
pub mod stale;
pub mod text;

#[cfg(test)]
pub(crate) mod fixtures;

pub use due_date::DueDateAnalyzer;
pub use engine::RecommendationEngine;
pub use list_movement::ListMovementAnalyzer;
pub use missing_description::MissingDescriptionAnalyzer;
pub use overdue::OverdueAnalyzer;
pub use recommendation::{CardRef, Priority, Recommendation, RecommendationKind};
pub use related_cards::RelatedCardsAnalyzer;
pub use scorer::Scorer;
pub use stale::StaleCardAnalyzer;

use crate::snapshot::{BoardCard, ListSnapshot};
use chrono::{DateTime, Local};

/// Everything an analyzer may look at during one pass
pub struct AnalysisContext<'a> {
    pub cards: &'a [BoardCard<'a>],
    pub lists: &'a [ListSnapshot],
    pub now: DateTime<Local>,
}

/// A single heuristic over the board
///
/// Implementations are pure: same context, same output.
pub trait Analyzer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation>;
}

impl<'a> From<BoardCard<'a>> for CardRef {
    fn from(card: BoardCard<'a>) -> Self {
        CardRef {
            id: card.id().to_string(),
            title: card.title().to_string(),
            list_title: card.list_title.to_string(),
        }
    }
}
