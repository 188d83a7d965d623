/// SQL query functions for the snapshot store
///
/// Import writes a whole board at once; reads hand back snapshots ready for
/// the engine.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{BoardwiseError, Result};
use crate::snapshot::{BoardSnapshot, CardSnapshot, ListSnapshot};
use std::collections::HashMap;

impl Database {
    /// Store a board snapshot, replacing any board with the same id
    ///
    /// Runs in one transaction; list and card positions follow snapshot order.
    /// List and card ids only need to be unique within the board.
    ///
    /// # Returns
    /// * `Err(BoardwiseError::InvalidSnapshot)` - if the snapshot has no owner
    pub async fn import_board(&self, snapshot: &BoardSnapshot) -> Result<()> {
        let owner = snapshot.owner.as_deref().ok_or_else(|| {
            BoardwiseError::InvalidSnapshot(format!("board '{}' has no owner", snapshot.id))
        })?;

        let mut tx = self.pool().begin().await?;

        // Cascades to members, lists and cards
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(&snapshot.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO boards (id, title, owner_id) VALUES (?, ?, ?)")
            .bind(&snapshot.id)
            .bind(&snapshot.title)
            .bind(owner)
            .execute(&mut *tx)
            .await?;

        for member in &snapshot.members {
            sqlx::query("INSERT OR IGNORE INTO board_members (board_id, user_id) VALUES (?, ?)")
                .bind(&snapshot.id)
                .bind(member)
                .execute(&mut *tx)
                .await?;
        }

        for (list_pos, list) in snapshot.lists.iter().enumerate() {
            sqlx::query("INSERT INTO lists (board_id, id, title, position) VALUES (?, ?, ?, ?)")
                .bind(&snapshot.id)
                .bind(&list.id)
                .bind(&list.title)
                .bind(list_pos as i64)
                .execute(&mut *tx)
                .await?;

            for (card_pos, card) in list.cards.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO cards (board_id, id, list_id, title, description, position, due_date, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&snapshot.id)
                .bind(&card.id)
                .bind(&list.id)
                .bind(&card.title)
                .bind(&card.description)
                .bind(card_pos as i64)
                .bind(format_timestamp(card.due_date))
                .bind(format_timestamp(card.updated_at))
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            board = %snapshot.id,
            lists = snapshot.lists.len(),
            cards = snapshot.card_count(),
            "board imported"
        );

        Ok(())
    }

    /// Get a board and its members
    ///
    /// # Returns
    /// * `Ok(None)` - if no board has this id
    pub async fn get_board(&self, board_id: &str) -> Result<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(
            "SELECT id, title, owner_id, imported_at FROM boards WHERE id = ?",
        )
        .bind(board_id)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let members: Vec<(String,)> = sqlx::query_as(
            "SELECT user_id FROM board_members WHERE board_id = ? ORDER BY rowid",
        )
        .bind(board_id)
        .fetch_all(self.pool())
        .await?;

        Ok(Some(Board {
            id: row.id,
            title: row.title,
            owner_id: row.owner_id,
            members: members.into_iter().map(|(m,)| m).collect(),
            imported_at: row.imported_at,
        }))
    }

    /// Lists of a board by position, each with its cards by position
    pub async fn get_board_lists(&self, board_id: &str) -> Result<Vec<ListSnapshot>> {
        let lists = sqlx::query_as::<_, ListRow>(
            "SELECT id, board_id, title, position FROM lists WHERE board_id = ? ORDER BY position, rowid",
        )
        .bind(board_id)
        .fetch_all(self.pool())
        .await?;

        let cards = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT id, list_id, title, description, position, due_date, updated_at
            FROM cards
            WHERE board_id = ?
            ORDER BY position, rowid
            "#,
        )
        .bind(board_id)
        .fetch_all(self.pool())
        .await?;

        let mut by_list: HashMap<String, Vec<CardSnapshot>> = HashMap::new();
        for row in cards {
            let list_id = row.list_id.clone();
            by_list.entry(list_id).or_default().push(row.into_snapshot()?);
        }

        Ok(lists
            .into_iter()
            .map(|list| {
                let cards = by_list.remove(&list.id).unwrap_or_default();
                list.into_snapshot(cards)
            })
            .collect())
    }

    /// Whole board back as a snapshot
    pub async fn get_board_snapshot(&self, board_id: &str) -> Result<Option<BoardSnapshot>> {
        let Some(board) = self.get_board(board_id).await? else {
            return Ok(None);
        };
        let lists = self.get_board_lists(board_id).await?;

        Ok(Some(BoardSnapshot {
            id: board.id,
            title: board.title,
            owner: Some(board.owner_id),
            members: board.members,
            lists,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample_board() -> BoardSnapshot {
        BoardSnapshot {
            id: "b1".to_string(),
            title: "Launch".to_string(),
            owner: Some("owner".to_string()),
            members: vec!["member".to_string()],
            lists: vec![
                ListSnapshot::new("l-todo", "To Do")
                    .with_card(CardSnapshot::new("c2", "Second"))
                    .with_card(CardSnapshot::new("c1", "First").with_description("body")),
                ListSnapshot::new("l-done", "Done").with_card(
                    CardSnapshot::new("c3", "Shipped")
                        .with_due_date(Utc::now() - Duration::days(2))
                        .with_updated_at(Utc::now()),
                ),
                ListSnapshot::new("l-empty", "Ideas"),
            ],
        }
    }

    #[tokio::test]
    async fn test_import_and_read_back() {
        let db = Database::new_in_memory().await.unwrap();
        let board = sample_board();

        db.import_board(&board).await.unwrap();
        let stored = db.get_board_snapshot("b1").await.unwrap().unwrap();

        assert_eq!(stored, board);
    }

    #[tokio::test]
    async fn test_lists_keep_order() {
        let db = Database::new_in_memory().await.unwrap();
        db.import_board(&sample_board()).await.unwrap();

        let lists = db.get_board_lists("b1").await.unwrap();
        let titles: Vec<_> = lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "Done", "Ideas"]);

        let card_ids: Vec<_> = lists[0].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(card_ids, vec!["c2", "c1"]);
        assert!(lists[2].cards.is_empty());
    }

    #[tokio::test]
    async fn test_reimport_replaces() {
        let db = Database::new_in_memory().await.unwrap();
        let mut board = sample_board();
        db.import_board(&board).await.unwrap();

        board.lists.truncate(1);
        board.members.clear();
        db.import_board(&board).await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_boards, 1);
        assert_eq!(stats.total_lists, 1);
        assert_eq!(stats.total_cards, 2);

        let stored = db.get_board("b1").await.unwrap().unwrap();
        assert!(stored.members.is_empty());
    }

    #[tokio::test]
    async fn test_boards_may_share_list_and_card_ids() {
        let db = Database::new_in_memory().await.unwrap();
        let board_for = |id: &str, card_title: &str| BoardSnapshot {
            id: id.to_string(),
            title: format!("Board {}", id),
            owner: Some("owner".to_string()),
            members: Vec::new(),
            lists: vec![ListSnapshot::new("l1", "To Do")
                .with_card(CardSnapshot::new("c1", card_title))],
        };
        let first = board_for("b1", "Write docs");
        let second = board_for("b2", "Fix login");

        db.import_board(&first).await.unwrap();
        db.import_board(&second).await.unwrap();

        assert_eq!(db.get_board_snapshot("b1").await.unwrap().unwrap(), first);
        assert_eq!(db.get_board_snapshot("b2").await.unwrap().unwrap(), second);

        // Re-importing one board leaves the other's rows alone
        db.import_board(&first).await.unwrap();
        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_lists, 2);
        assert_eq!(stats.total_cards, 2);
        assert_eq!(db.get_board_snapshot("b2").await.unwrap().unwrap(), second);
    }

    #[tokio::test]
    async fn test_unknown_board() {
        let db = Database::new_in_memory().await.unwrap();
        assert!(db.get_board("nope").await.unwrap().is_none());
        assert!(db.get_board_lists("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_import_requires_owner() {
        let db = Database::new_in_memory().await.unwrap();
        let mut board = sample_board();
        board.owner = None;

        let result = db.import_board(&board).await;
        assert!(matches!(result, Err(BoardwiseError::InvalidSnapshot(_))));
    }
}
