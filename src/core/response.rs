/// Response envelope
///
/// The success/message wrapper the board API answers with, plus the HTTP
/// status that goes with it.

use crate::error::{BoardwiseError, Result};
use crate::recommend::Recommendation;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsData {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RecommendationsData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub status: u16,
}

impl ApiResponse {
    pub fn ok(recommendations: Vec<Recommendation>) -> Self {
        Self {
            success: true,
            data: Some(RecommendationsData { recommendations }),
            message: None,
            status: 200,
        }
    }

    pub fn error(err: &BoardwiseError) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(err.user_message()),
            status: err.status_code(),
        }
    }

    pub fn from_result(result: Result<Vec<Recommendation>>) -> Self {
        match result {
            Ok(recommendations) => Self::ok(recommendations),
            Err(e) => Self::error(&e),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
