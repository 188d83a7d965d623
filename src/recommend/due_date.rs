// Suggests due dates for cards that don't have one
//
// Looks at the card text in three passes: keyword vocabularies, specific
// time phrases ("tomorrow", "next week"), then "in N days" style timeframes.

use crate::config::DueDateConfig;
use crate::error::Result;
use crate::recommend::text::contains_any;
use crate::recommend::{AnalysisContext, Analyzer, Priority, Recommendation, RecommendationKind, Scorer};
use chrono::SecondsFormat;
use regex::Regex;

// "in 3 days", "within 2 weeks", "by 10days"
const TIMEFRAME_PATTERN: &str = r"(?:in|within|by)\s*([0-9]+)\s*(day|days|week|weeks)";

/// What fired and what it implies
#[derive(Debug, Clone, PartialEq)]
struct Signal {
    days: u64,
    priority: Priority,
    reason: String,
}

pub struct DueDateAnalyzer {
    config: DueDateConfig,
    timeframe: Regex,
}

impl DueDateAnalyzer {
    pub fn new(config: DueDateConfig) -> Result<Self> {
        Ok(Self {
            config,
            timeframe: Regex::new(TIMEFRAME_PATTERN)?,
        })
    }

    /// Work out a due date offset from lower-cased card text
    fn detect(&self, text: &str) -> Option<Signal> {
        let mut found = self.keyword_signal(text);

        // A phrase only wins if it means an earlier date
        for rule in &self.config.phrase_rules {
            if !contains_any(text, &rule.phrases) {
                continue;
            }
            if found.as_ref().map_or(true, |s| rule.days < s.days) {
                found = Some(Signal {
                    days: rule.days,
                    priority: rule.priority,
                    reason: "Mentions specific time reference".to_string(),
                });
                break;
            }
        }

        if found.is_none() {
            found = self.timeframe_signal(text);
        }

        found
    }

    fn keyword_signal(&self, text: &str) -> Option<Signal> {
        let c = &self.config;

        if contains_any(text, &c.urgent_keywords) {
            Some(Signal {
                days: c.urgent_days,
                priority: Priority::High,
                reason: "Contains urgent keywords (urgent, asap, critical, etc.)".to_string(),
            })
        } else if contains_any(text, &c.soon_keywords) {
            Some(Signal {
                days: c.soon_days,
                priority: Priority::Medium,
                reason: "Contains time-sensitive keywords (soon, deadline, this week, etc.)"
                    .to_string(),
            })
        } else if contains_any(text, &c.later_keywords) {
            Some(Signal {
                days: c.later_days,
                priority: Priority::Low,
                reason: "Contains keywords suggesting future work".to_string(),
            })
        } else {
            None
        }
    }

    fn timeframe_signal(&self, text: &str) -> Option<Signal> {
        let caps = self.timeframe.captures(text)?;
        let count: u64 = caps.get(1)?.as_str().parse().ok()?;
        let in_weeks = caps.get(2)?.as_str().starts_with("week");

        let days = if in_weeks { count.checked_mul(7)? } else { count };
        let unit = if in_weeks { "week(s)" } else { "day(s)" };

        Some(Signal {
            days,
            priority: Scorer::priority_for_days(
                days,
                self.config.high_max_days,
                self.config.medium_max_days,
            ),
            reason: format!("Mentions specific timeframe ({} {})", count, unit),
        })
    }
}

impl Analyzer for DueDateAnalyzer {
    fn name(&self) -> &'static str {
        "due_date"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let mut suggestions = Vec::new();

        for card in ctx.cards.iter().filter(|c| c.card.due_date.is_none()) {
            let Some(signal) = self.detect(&card.search_text()) else {
                continue;
            };
            // Out of calendar range; nothing sensible to suggest
            let Some(due) = Scorer::end_of_day_after(ctx.now, signal.days) else {
                continue;
            };

            suggestions.push(Recommendation {
                kind: RecommendationKind::DueDate {
                    card_id: card.id().to_string(),
                    card_title: card.title().to_string(),
                    suggested_due_date: due.to_rfc3339_opts(SecondsFormat::Millis, true),
                    suggested_days: signal.days,
                },
                priority: signal.priority,
                title: "Suggested Due Date".to_string(),
                description: format!(
                    "Consider setting a due date for \"{}\" based on content analysis.",
                    card.title()
                ),
                reason: signal.reason,
            });
        }

        suggestions
    }
}
