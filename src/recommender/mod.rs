pub mod content;
pub mod engine;
pub mod evaluate;
pub mod matrix;
pub mod profile;

use std::marker::PhantomData;

use num::Float;

use crate::error::RecommendError;

use self::engine::{MeanCenteredCosine, SimilarityEngine};
use self::evaluate::Evaluation;
use self::matrix::RatingMatrix;
use self::profile::RatingProfile;

/// User-based collaborative filtering engine.
///
/// `Recommender<S, E>` has the following generic parameters:
/// - `S`: rating scalar type (e.g. f32, f64)
/// - `E`: similarity engine type (e.g. [`MeanCenteredCosine`])
///
/// Construction consumes a [`RatingMatrix`] and mean-centers it exactly once;
/// the raw scores are not retained. Afterwards the matrix is read-only and
/// every evaluation pass works on the centered scores, so one `Recommender`
/// can serve any number of targets.
///
/// The pipeline for one target runs in two stages that build on each other:
/// [`Recommender::rank_similar`] produces the full similarity ranking, and
/// [`Recommender::recommend_from`] aggregates recommendations from a prefix
/// of it. [`Recommender::evaluate`] composes both and also reports the
/// target's own centered profile.
#[derive(Debug, Clone)]
pub struct Recommender<S = f64, E = MeanCenteredCosine>
where
    S: Float,
    E: SimilarityEngine<S>,
{
    matrix: RatingMatrix<S>,
    _marker: PhantomData<E>,
}

impl<S, E> Recommender<S, E>
where
    S: Float,
    E: SimilarityEngine<S>,
{
    /// Build a recommender over `matrix`, mean-centering it in place.
    pub fn new(mut matrix: RatingMatrix<S>) -> Self {
        matrix.mean_center_all();
        Recommender {
            matrix,
            _marker: PhantomData,
        }
    }

    pub fn user_count(&self) -> usize {
        self.matrix.user_count()
    }

    /// The centered profile of `user`, if the id is in range.
    pub fn profile(&self, user: usize) -> Option<&RatingProfile<S>> {
        self.matrix.profile(user)
    }

    pub fn matrix(&self) -> &RatingMatrix<S> {
        &self.matrix
    }

    /// Run the full pipeline for `target`: the target's own centered scores,
    /// the `reference_count` most similar users, and up to `result_count`
    /// recommendations aggregated from them.
    ///
    /// A `reference_count` larger than the number of rankable users degrades
    /// to the available count.
    pub fn evaluate(
        &self,
        target: usize,
        reference_count: usize,
        result_count: usize,
    ) -> Result<Evaluation<S>, RecommendError> {
        let target_profile =
            self.matrix
                .profile(target)
                .ok_or(RecommendError::TargetOutOfRange {
                    target,
                    user_count: self.matrix.user_count(),
                })?;
        let mut neighbors = self.rank_similar(target)?;
        let recommendations =
            self.recommend_from(&neighbors, target, reference_count, result_count)?;
        neighbors.list.truncate(reference_count);
        Ok(Evaluation {
            target_scores: target_profile.sorted_scores(),
            neighbors,
            recommendations,
        })
    }
}
