/// Core functionality modules
///
/// Serving recommendations for a stored board: lookup, access check,
/// analysis, and the response envelope.

pub mod recommender;
pub mod response;

pub use recommender::BoardRecommender;
pub use response::{ApiResponse, RecommendationsData};
