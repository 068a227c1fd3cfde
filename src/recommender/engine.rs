use num::Float;

use super::profile::RatingProfile;

/// Scoring seam between the rating matrix and the similarity ranking.
///
/// An engine scores one candidate profile against the target profile. The
/// target's magnitude is computed once by the caller and reused for every
/// candidate.
pub trait SimilarityEngine<S>
where
    S: Float,
{
    /// Score `candidate` against `target`, or `None` to exclude the candidate
    /// from the ranking. A zero-magnitude vector on either side carries no
    /// similarity signal and must be excluded, never scored as 0.
    fn similarity(
        target: &RatingProfile<S>,
        target_magnitude: S,
        candidate: &RatingProfile<S>,
    ) -> Option<S>;
}

/// Cosine similarity over mean-centered rating vectors.
///
/// The numerator sums over content rated by both users, while each
/// denominator is the magnitude of that user's full rated set. Sparse overlap
/// therefore lowers the score instead of renormalizing it; this is a known
/// deviation from textbook cosine similarity restricted to the overlap set,
/// and changing it would change every downstream recommendation score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanCenteredCosine;

impl<S> SimilarityEngine<S> for MeanCenteredCosine
where
    S: Float,
{
    fn similarity(
        target: &RatingProfile<S>,
        target_magnitude: S,
        candidate: &RatingProfile<S>,
    ) -> Option<S> {
        let mut dot = S::zero();
        let mut candidate_sq = S::zero();
        for (content, score) in candidate.iter() {
            candidate_sq = candidate_sq + score * score;
            if let Some(target_score) = target.score(&content) {
                dot = dot + score * target_score;
            }
        }
        let denominator = candidate_sq.sqrt() * target_magnitude;
        if denominator.is_zero() {
            return None;
        }
        Some(dot / denominator)
    }
}
