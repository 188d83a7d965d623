/// Snapshot module
///
/// The board state one recommendation pass works from, plus the helpers
/// that turn it into the flat card list analyzers scan.

pub mod models;

pub use models::{BoardCard, BoardSnapshot, CardSnapshot, ListSnapshot};

use crate::error::Result;
use std::path::Path;

/// Flatten lists into cards tagged with their list, in board order
pub fn flatten(lists: &[ListSnapshot]) -> Vec<BoardCard<'_>> {
    lists
        .iter()
        .flat_map(|list| {
            list.cards.iter().map(move |card| BoardCard {
                card,
                list_id: &list.id,
                list_title: &list.title,
            })
        })
        .collect()
}

/// Read a board snapshot from a JSON file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BoardSnapshot> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let snapshot: BoardSnapshot = serde_json::from_str(&content)?;

    tracing::debug!(
        board = %snapshot.id,
        lists = snapshot.lists.len(),
        cards = snapshot.card_count(),
        "loaded snapshot from {}",
        path.as_ref().display()
    );

    Ok(snapshot)
}
