// Suggests moving cards between lists
//
// If a card's text says work has started, finished, or not begun yet, and
// the board has a list for that state, point the card at it.

use crate::config::ListMovementConfig;
use crate::recommend::text::contains_any;
use crate::recommend::{AnalysisContext, Analyzer, Priority, Recommendation, RecommendationKind};
use crate::snapshot::{BoardCard, ListSnapshot};

/// One kind of move: which words trigger it and what to say
struct Move<'a> {
    priority: Priority,
    title: &'static str,
    description: fn(&str, &str) -> String,
    reason: &'static str,
    target_titles: &'a [String],
}

pub struct ListMovementAnalyzer {
    config: ListMovementConfig,
}

impl ListMovementAnalyzer {
    pub fn new(config: ListMovementConfig) -> Self {
        Self { config }
    }

    /// First list, other than the current one, whose title has one of `fragments`
    fn find_target<'l>(
        lists: &'l [ListSnapshot],
        current_id: &str,
        fragments: &[String],
    ) -> Option<&'l ListSnapshot> {
        lists.iter().find(|l| {
            l.id != current_id && contains_any(&l.title.to_lowercase(), fragments)
        })
    }

    fn suggest(
        card: &BoardCard<'_>,
        current: &ListSnapshot,
        lists: &[ListSnapshot],
        mv: &Move<'_>,
    ) -> Option<Recommendation> {
        let target = Self::find_target(lists, &current.id, mv.target_titles)?;

        Some(Recommendation {
            kind: RecommendationKind::ListMovement {
                card_id: card.id().to_string(),
                card_title: card.title().to_string(),
                current_list: current.title.clone(),
                suggested_list: target.title.clone(),
                suggested_list_id: target.id.clone(),
            },
            priority: mv.priority,
            title: mv.title.to_string(),
            description: (mv.description)(card.title(), &target.title),
            reason: mv.reason.to_string(),
        })
    }
}

impl Analyzer for ListMovementAnalyzer {
    fn name(&self) -> &'static str {
        "list_movement"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let c = &self.config;
        let to_progress = Move {
            priority: Priority::High,
            title: "Move to In Progress",
            description: |card, list| {
                format!(
                    "\"{}\" mentions work has started. Consider moving it to \"{}\".",
                    card, list
                )
            },
            reason: "Content contains keywords indicating work has started (started, working on, implementing, etc.)",
            target_titles: &c.progress_list_titles,
        };
        let to_done = Move {
            priority: Priority::High,
            title: "Move to Done",
            description: |card, list| {
                format!(
                    "\"{}\" mentions completion. Consider moving it to \"{}\".",
                    card, list
                )
            },
            reason: "Content contains keywords indicating completion (completed, done, finished, deployed, etc.)",
            target_titles: &c.done_list_titles,
        };
        let to_todo = Move {
            priority: Priority::Medium,
            title: "Move to To Do",
            description: |card, list| {
                format!(
                    "\"{}\" mentions it's not started yet. Consider moving it to \"{}\".",
                    card, list
                )
            },
            reason: "Content contains keywords indicating it should be in todo (todo, pending, not started, etc.)",
            target_titles: &c.todo_list_titles,
        };

        let mut suggestions = Vec::new();

        for card in ctx.cards {
            let Some(current) = ctx.lists.iter().find(|l| l.id == card.list_id) else {
                continue;
            };
            let text = card.search_text();
            let current_title = current.title.to_lowercase();

            if contains_any(&text, &c.progress_keywords)
                && !contains_any(&current_title, &c.skip_progress_from)
            {
                suggestions.extend(Self::suggest(card, current, ctx.lists, &to_progress));
            }

            if contains_any(&text, &c.done_keywords) && !contains_any(&current_title, &c.skip_done_from)
            {
                suggestions.extend(Self::suggest(card, current, ctx.lists, &to_done));
            }

            if contains_any(&text, &c.todo_keywords) && contains_any(&current_title, &c.todo_only_from) {
                suggestions.extend(Self::suggest(card, current, ctx.lists, &to_todo));
            }
        }

        suggestions
    }
}
