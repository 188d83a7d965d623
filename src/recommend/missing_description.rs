// One summary for every card that has no description

use crate::recommend::{AnalysisContext, Analyzer, CardRef, Priority, Recommendation, RecommendationKind};

pub struct MissingDescriptionAnalyzer;

impl Analyzer for MissingDescriptionAnalyzer {
    fn name(&self) -> &'static str {
        "missing_description"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let cards: Vec<CardRef> = ctx
            .cards
            .iter()
            .filter(|c| c.card.is_missing_description())
            .map(|&c| CardRef::from(c))
            .collect();

        if cards.is_empty() {
            return Vec::new();
        }

        let count = cards.len();
        vec![Recommendation {
            kind: RecommendationKind::MissingDescription { cards, count },
            priority: Priority::Low,
            title: "Cards Without Descriptions".to_string(),
            description: format!(
                "{} card(s) don't have descriptions. Adding descriptions can help with better organization and recommendations.",
                count
            ),
            reason: "Cards missing descriptions may benefit from additional context".to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::fixtures::run;
    use crate::snapshot::{CardSnapshot, ListSnapshot};

    #[test]
    fn test_single_summary_with_count() {
        let lists = vec![
            ListSnapshot::new("l1", "To Do")
                .with_card(CardSnapshot::new("c1", "No description"))
                .with_card(CardSnapshot::new("c2", "Has one").with_description("details")),
            ListSnapshot::new("l2", "Done")
                .with_card(CardSnapshot::new("c3", "Blank").with_description("  ")),
        ];

        let recs = run(&MissingDescriptionAnalyzer, &lists);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Low);
        match &recs[0].kind {
            RecommendationKind::MissingDescription { cards, count } => {
                assert_eq!(*count, 2);
                assert_eq!(cards[0].id, "c1");
                assert_eq!(cards[1].id, "c3");
                assert_eq!(cards[1].list_title, "Done");
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_all_described() {
        let lists = vec![ListSnapshot::new("l1", "To Do")
            .with_card(CardSnapshot::new("c1", "A").with_description("x"))];

        assert!(run(&MissingDescriptionAnalyzer, &lists).is_empty());
    }
}
