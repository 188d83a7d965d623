/// Recommendation model
///
/// What the engine hands back. Serializes to the JSON shape the board
/// frontend renders: a `type` tag, priority, texts, and a per-type payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How soon the user should act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank, higher first
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// Short reference to a card inside a grouped recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRef {
    pub id: String,
    pub title: String,
    pub list_title: String,
}

/// Per-type payload; the variant name is the `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RecommendationKind {
    DueDate {
        card_id: String,
        card_title: String,
        /// ISO 8601, UTC, millisecond precision
        suggested_due_date: String,
        suggested_days: u64,
    },
    ListMovement {
        card_id: String,
        card_title: String,
        current_list: String,
        suggested_list: String,
        suggested_list_id: String,
    },
    RelatedCards {
        related_cards: Vec<CardRef>,
        keyword: String,
    },
    Overdue {
        card_id: String,
        card_title: String,
        due_date: DateTime<Utc>,
        days_overdue: i64,
    },
    MissingDescription {
        cards: Vec<CardRef>,
        count: usize,
    },
    StaleCard {
        card_id: String,
        card_title: String,
        list_title: String,
        days_since_update: i64,
    },
}

impl RecommendationKind {
    /// The `type` string as it appears on the wire
    pub fn type_name(&self) -> &'static str {
        match self {
            RecommendationKind::DueDate { .. } => "due_date",
            RecommendationKind::ListMovement { .. } => "list_movement",
            RecommendationKind::RelatedCards { .. } => "related_cards",
            RecommendationKind::Overdue { .. } => "overdue",
            RecommendationKind::MissingDescription { .. } => "missing_description",
            RecommendationKind::StaleCard { .. } => "stale_card",
        }
    }
}

/// One finding about the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub reason: String,
}

impl Recommendation {
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}
