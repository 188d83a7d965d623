// Board-level entry point: find the board, check who's asking, analyze it
//
// The engine is pure and synchronous. This wraps it with the lookups a
// request needs and runs it off the async threads with a time limit.

use crate::config::EngineConfig;
use crate::db::{Board, Database};
use crate::error::{BoardwiseError, Result};
use crate::recommend::{Recommendation, RecommendationEngine};
use std::sync::Arc;
use std::time::Duration;

pub struct BoardRecommender {
    db: Arc<Database>,
    engine: Arc<RecommendationEngine>,
    timeout: Duration,
}

impl BoardRecommender {
    pub fn new(db: Arc<Database>, config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            db,
            engine: Arc::new(RecommendationEngine::new(config)?),
            timeout: Duration::from_millis(config.analysis_timeout_ms),
        })
    }

    /// Recommendations for `board_id` as seen by `user_id`
    ///
    /// # Returns
    /// * `Err(BoardNotFound)` - no such board
    /// * `Err(AccessDenied)` - user is neither owner nor member
    /// * `Err(AnalysisTimeout)` - analysis ran past the configured limit
    ///
    /// A timeout only abandons the result. The analysis keeps running on the
    /// blocking pool until it finishes.
    pub async fn recommendations_for(
        &self,
        board_id: &str,
        user_id: &str,
    ) -> Result<Vec<Recommendation>> {
        let board = self
            .db
            .get_board(board_id)
            .await?
            .ok_or_else(|| BoardwiseError::BoardNotFound(board_id.to_string()))?;

        Self::check_access(&board, user_id)?;

        let lists = self.db.get_board_lists(board_id).await?;
        let engine = Arc::clone(&self.engine);

        let task = tokio::task::spawn_blocking(move || engine.recommend(&lists));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => joined.map_err(|e| BoardwiseError::Generic(format!("analysis task failed: {}", e))),
            Err(_) => {
                let ms = self.timeout.as_millis() as u64;
                tracing::warn!(board = %board_id, timeout_ms = ms, "analysis timed out");
                Err(BoardwiseError::AnalysisTimeout(ms))
            }
        }
    }

    fn check_access(board: &Board, user_id: &str) -> Result<()> {
        if board.is_visible_to(user_id) {
            Ok(())
        } else {
            tracing::warn!(board = %board.id, user = %user_id, "access denied");
            Err(BoardwiseError::AccessDenied(board.id.clone()))
        }
    }
}
