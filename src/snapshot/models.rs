/// Board snapshot models
///
/// Read-only view of a board handed to the recommendation engine.
/// Field names follow the JSON the board API emits (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single card as it looked when the snapshot was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CardSnapshot {
    /// Card with only a title, everything else empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            due_date: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// True when there is no description or it is only whitespace
    pub fn is_missing_description(&self) -> bool {
        self.description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
    }
}

/// A list (column) with its cards in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<CardSnapshot>,
}

impl ListSnapshot {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, card: CardSnapshot) -> Self {
        self.cards.push(card);
        self
    }
}

/// Whole board: identity, who may see it, and its lists in position order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub lists: Vec<ListSnapshot>,
}

impl BoardSnapshot {
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

/// A card annotated with the list that holds it
///
/// Borrows from the snapshot; the engine never copies or mutates cards.
#[derive(Debug, Clone, Copy)]
pub struct BoardCard<'a> {
    pub card: &'a CardSnapshot,
    pub list_id: &'a str,
    pub list_title: &'a str,
}

impl<'a> BoardCard<'a> {
    pub fn id(&self) -> &'a str {
        &self.card.id
    }

    pub fn title(&self) -> &'a str {
        &self.card.title
    }

    /// Lower-cased "title description", the text every analyzer matches on
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.card.title,
            self.card.description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_uses_camel_case() {
        let json = r#"{
            "id": "c1",
            "title": "Ship it",
            "dueDate": "2025-03-01T10:00:00Z",
            "updatedAt": "2025-02-01T10:00:00.000Z"
        }"#;

        let card: CardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "c1");
        assert!(card.description.is_none());
        assert!(card.due_date.is_some());
        assert!(card.updated_at.is_some());
    }

    #[test]
    fn test_missing_description() {
        assert!(CardSnapshot::new("1", "a").is_missing_description());
        assert!(CardSnapshot::new("1", "a")
            .with_description("   \n")
            .is_missing_description());
        assert!(!CardSnapshot::new("1", "a")
            .with_description("details")
            .is_missing_description());
    }

    #[test]
    fn test_search_text() {
        let card = CardSnapshot::new("1", "Fix LOGIN").with_description("Today");
        let board_card = BoardCard {
            card: &card,
            list_id: "l1",
            list_title: "To Do",
        };
        assert_eq!(board_card.search_text(), "fix login today");

        let bare = CardSnapshot::new("2", "Plain");
        let board_card = BoardCard {
            card: &bare,
            list_id: "l1",
            list_title: "To Do",
        };
        assert_eq!(board_card.search_text(), "plain ");
    }
}
