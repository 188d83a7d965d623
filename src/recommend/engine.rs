/// Recommendation engine
///
/// Runs every analyzer over the same flattened board and ranks the results.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::recommend::{
    AnalysisContext, Analyzer, DueDateAnalyzer, ListMovementAnalyzer, MissingDescriptionAnalyzer,
    OverdueAnalyzer, Recommendation, RelatedCardsAnalyzer, StaleCardAnalyzer,
};
use crate::snapshot::{flatten, ListSnapshot};
use chrono::{DateTime, Local};
use std::cmp::Reverse;

/// Recommendation engine
///
/// Holds no per-board state; one instance can serve any number of boards
/// concurrently.
pub struct RecommendationEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl RecommendationEngine {
    /// Create the engine with the six standard analyzers
    ///
    /// Order matters: it is the tie-break order between equal priorities.
    ///
    /// # Returns
    /// * `Err(BoardwiseError::Pattern)` - if a built-in pattern fails to compile
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_analyzers(vec![
            Box::new(DueDateAnalyzer::new(config.due_date.clone())?),
            Box::new(ListMovementAnalyzer::new(config.list_movement.clone())),
            Box::new(RelatedCardsAnalyzer::new(config.related_cards.clone())?),
            Box::new(OverdueAnalyzer),
            Box::new(MissingDescriptionAnalyzer),
            Box::new(StaleCardAnalyzer::new(config.stale.clone())),
        ]))
    }

    /// Engine over a custom analyzer set, run in the given order
    pub fn with_analyzers(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Recommendations for a board as of right now
    pub fn recommend(&self, lists: &[ListSnapshot]) -> Vec<Recommendation> {
        self.recommend_at(lists, Local::now())
    }

    /// Recommendations for a board as of `now`
    ///
    /// Deterministic: the same lists and the same `now` give the same output.
    pub fn recommend_at(&self, lists: &[ListSnapshot], now: DateTime<Local>) -> Vec<Recommendation> {
        let cards = flatten(lists);
        let ctx = AnalysisContext {
            cards: &cards,
            lists,
            now,
        };

        let mut recommendations = Vec::new();
        for analyzer in &self.analyzers {
            let found = analyzer.analyze(&ctx);
            tracing::debug!(analyzer = analyzer.name(), count = found.len(), "analyzer finished");
            recommendations.extend(found);
        }

        // Stable: equal priorities keep analyzer order
        recommendations.sort_by_key(|r| Reverse(r.priority.rank()));

        tracing::info!(
            lists = lists.len(),
            cards = cards.len(),
            recommendations = recommendations.len(),
            "board analyzed"
        );

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::fixtures::{days_ago, fixed_now, kanban};
    use crate::recommend::{Priority, RecommendationKind};
    use crate::snapshot::CardSnapshot;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(&EngineConfig::default()).unwrap()
    }

    fn busy_board() -> Vec<ListSnapshot> {
        let mut lists = kanban();
        lists[0].cards.push(CardSnapshot::new("c1", "Someday: tidy the wiki"));
        lists[0].cards.push(
            CardSnapshot::new("c2", "Build API").with_description("started implementing the API"),
        );
        lists[1].cards.push(
            CardSnapshot::new("c3", "Quarterly report")
                .with_description("numbers for finance")
                .with_due_date(days_ago(3))
                .with_updated_at(days_ago(45)),
        );
        lists[2]
            .cards
            .push(CardSnapshot::new("c4", "Quarterly report draft").with_description("numbers"));
        lists
    }

    #[test]
    fn test_empty_board() {
        assert!(engine().recommend_at(&[], fixed_now()).is_empty());
        assert!(engine().recommend_at(&kanban(), fixed_now()).is_empty());
    }

    #[test]
    fn test_analyzer_order() {
        assert_eq!(
            engine().analyzer_names(),
            vec![
                "due_date",
                "list_movement",
                "related_cards",
                "overdue",
                "missing_description",
                "stale_card"
            ]
        );
    }

    #[test]
    fn test_priorities_non_increasing_and_ties_in_analyzer_order() {
        let recs = engine().recommend_at(&busy_board(), fixed_now());
        let summary: Vec<(&str, Priority)> =
            recs.iter().map(|r| (r.type_name(), r.priority)).collect();

        assert_eq!(
            summary,
            vec![
                ("list_movement", Priority::High),
                ("overdue", Priority::High),
                ("related_cards", Priority::Medium),
                ("stale_card", Priority::Medium),
                ("due_date", Priority::Low),
                ("missing_description", Priority::Low),
            ]
        );
    }

    #[test]
    fn test_same_input_same_output() {
        let lists = busy_board();
        let first = serde_json::to_string(&engine().recommend_at(&lists, fixed_now())).unwrap();
        let second = serde_json::to_string(&engine().recommend_at(&lists, fixed_now())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_untouched() {
        let lists = busy_board();
        let before = lists.clone();
        let _ = engine().recommend_at(&lists, fixed_now());
        assert_eq!(lists, before);
    }

    #[test]
    fn test_custom_analyzer_set() {
        struct Always;
        impl Analyzer for Always {
            fn name(&self) -> &'static str {
                "always"
            }
            fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
                ctx.cards
                    .iter()
                    .map(|c| Recommendation {
                        kind: RecommendationKind::Overdue {
                            card_id: c.id().to_string(),
                            card_title: c.title().to_string(),
                            due_date: ctx.now.with_timezone(&chrono::Utc),
                            days_overdue: 0,
                        },
                        priority: Priority::Low,
                        title: String::new(),
                        description: String::new(),
                        reason: String::new(),
                    })
                    .collect()
            }
        }

        let engine = RecommendationEngine::with_analyzers(vec![Box::new(Always)]);
        assert_eq!(engine.recommend_at(&busy_board(), fixed_now()).len(), 4);
    }
}
