pub mod recommend;
pub mod similarity;

pub use recommend::{RecommendationEntry, Recommendations};
pub use similarity::{SimilarityEntry, SimilarityRanking};

use serde::Serialize;

use super::content::ContentId;

/// The three artifacts of one evaluation run for a target user.
///
/// Everything here is derived, immutable, and scoped to the run that produced
/// it. Numeric formatting is left to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation<S = f64> {
    /// The target's own centered scores, in content id order.
    pub target_scores: Vec<(ContentId, S)>,
    /// The most similar users, best first, at most the requested reference
    /// count.
    pub neighbors: SimilarityRanking<S>,
    /// Recommended content, best first, at most the requested result count.
    pub recommendations: Recommendations<S>,
}
