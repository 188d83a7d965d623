/// Data models for database rows
///
/// Rows map 1:1 to tables; conversion into snapshots happens here so the
/// engine never sees storage types.

use crate::error::{BoardwiseError, Result};
use crate::snapshot::{CardSnapshot, ListSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored board with the users who may see it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub owner_id: String,
    pub members: Vec<String>,
    pub imported_at: String, // ISO 8601 format from SQLite
}

impl Board {
    /// Owners and members may read the board
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.owner_id == user_id || self.members.iter().any(|m| m == user_id)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BoardRow {
    pub id: String,
    pub title: String,
    pub owner_id: String,
    pub imported_at: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ListRow {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub position: i64,
}

impl ListRow {
    pub fn into_snapshot(self, cards: Vec<CardSnapshot>) -> ListSnapshot {
        ListSnapshot {
            id: self.id,
            title: self.title,
            cards,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CardRow {
    pub id: String,
    pub list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub position: i64,
    pub due_date: Option<String>,
    pub updated_at: Option<String>,
}

impl CardRow {
    pub fn into_snapshot(self) -> Result<CardSnapshot> {
        Ok(CardSnapshot {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: parse_timestamp(self.due_date)?,
            updated_at: parse_timestamp(self.updated_at)?,
        })
    }
}

/// Stored timestamps are RFC 3339; anything else is a corrupt row
pub fn parse_timestamp(value: Option<String>) -> Result<Option<DateTime<Utc>>> {
    value
        .map(|v| {
            DateTime::parse_from_rfc3339(&v)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| BoardwiseError::InvalidTimestamp(v))
        })
        .transpose()
}

pub fn format_timestamp(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|dt| dt.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_visibility() {
        let board = Board {
            id: "b1".to_string(),
            title: "Sprint".to_string(),
            owner_id: "owner".to_string(),
            members: vec!["member".to_string()],
            imported_at: "2025-03-01T00:00:00Z".to_string(),
        };

        assert!(board.is_visible_to("owner"));
        assert!(board.is_visible_to("member"));
        assert!(!board.is_visible_to("stranger"));
    }

    #[test]
    fn test_timestamp_round_trip() {
        let now = Utc::now();
        let parsed = parse_timestamp(format_timestamp(Some(now))).unwrap();
        assert_eq!(parsed, Some(now));
        assert_eq!(parse_timestamp(None).unwrap(), None);
    }

    #[test]
    fn test_bad_timestamp() {
        let result = parse_timestamp(Some("last tuesday".to_string()));
        assert!(matches!(result, Err(BoardwiseError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_card_row_into_snapshot() {
        let row = CardRow {
            id: "c1".to_string(),
            list_id: "l1".to_string(),
            title: "Write docs".to_string(),
            description: None,
            position: 0,
            due_date: Some("2025-03-01T10:00:00+00:00".to_string()),
            updated_at: None,
        };

        let card = row.into_snapshot().unwrap();
        assert_eq!(card.id, "c1");
        assert!(card.due_date.is_some());
        assert!(card.updated_at.is_none());
    }
}
