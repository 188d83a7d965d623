// Flags cards whose due date has passed

use crate::recommend::{AnalysisContext, Analyzer, Priority, Recommendation, RecommendationKind, Scorer};
use chrono::Utc;

pub struct OverdueAnalyzer;

impl Analyzer for OverdueAnalyzer {
    fn name(&self) -> &'static str {
        "overdue"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let now = ctx.now.with_timezone(&Utc);

        ctx.cards
            .iter()
            .filter_map(|card| {
                let due = card.card.due_date?;
                if due >= now {
                    return None;
                }
                let days = Scorer::whole_days_between(due, now);

                Some(Recommendation {
                    kind: RecommendationKind::Overdue {
                        card_id: card.id().to_string(),
                        card_title: card.title().to_string(),
                        due_date: due,
                        days_overdue: days,
                    },
                    priority: Priority::High,
                    title: "Overdue Card".to_string(),
                    description: format!("Card \"{}\" is {} day(s) overdue.", card.title(), days),
                    reason: format!("Due date was {} day(s) ago", days),
                })
            })
            .collect()
    }
}
