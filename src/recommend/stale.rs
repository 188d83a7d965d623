// Flags cards nobody has touched in a while
//
// Finished cards are expected to sit still, so lists that look like "Done"
// are skipped.

use crate::config::StaleConfig;
use crate::recommend::text::contains_any;
use crate::recommend::{AnalysisContext, Analyzer, Priority, Recommendation, RecommendationKind, Scorer};
use chrono::Utc;

pub struct StaleCardAnalyzer {
    config: StaleConfig,
}

impl StaleCardAnalyzer {
    pub fn new(config: StaleConfig) -> Self {
        Self { config }
    }

    fn priority_for(&self, days_since_update: i64) -> Option<Priority> {
        if days_since_update >= self.config.very_stale_days {
            Some(Priority::High)
        } else if days_since_update >= self.config.stale_days {
            Some(Priority::Medium)
        } else {
            None
        }
    }
}

impl Analyzer for StaleCardAnalyzer {
    fn name(&self) -> &'static str {
        "stale_card"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let now = ctx.now.with_timezone(&Utc);
        let mut suggestions = Vec::new();

        for card in ctx.cards {
            let Some(updated_at) = card.card.updated_at else {
                continue;
            };
            if contains_any(&card.list_title.to_lowercase(), &self.config.exempt_list_titles) {
                continue;
            }

            let days = Scorer::whole_days_between(updated_at, now);
            let Some(priority) = self.priority_for(days) else {
                continue;
            };

            suggestions.push(Recommendation {
                kind: RecommendationKind::StaleCard {
                    card_id: card.id().to_string(),
                    card_title: card.title().to_string(),
                    list_title: card.list_title.to_string(),
                    days_since_update: days,
                },
                priority,
                title: "Stale Card".to_string(),
                description: format!(
                    "\"{}\" hasn't been updated in {} day(s). Consider reviewing or archiving it.",
                    card.title(),
                    days
                ),
                reason: format!("No updates for {} day(s)", days),
            });
        }

        suggestions
    }
}
