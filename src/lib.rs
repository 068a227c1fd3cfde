/// This crate is a user-based collaborative filtering recommendation engine.
pub mod recommender;
pub mod dataset;
pub mod error;

/// Collaborative Filtering Recommender
/// The top-level struct of this crate, providing the full recommendation
/// pipeline. It consumes a sparse rating matrix, mean-centers every user's
/// scores exactly once, and then answers similarity rankings and
/// recommendation queries for any target user.
///
/// `Recommender<S, E>` has the following generic parameters:
/// - `S`: rating scalar type (e.g. f32, f64)
/// - `E`: similarity engine type (e.g. MeanCenteredCosine)
pub use recommender::Recommender;

/// Sparse Rating Matrix
/// One rating profile per user, indexed by user id. Built from rating
/// records (directly or via the `dataset` module), then handed to
/// `Recommender::new` for centering.
pub use recommender::matrix::RatingMatrix;

/// Rating Profile
/// One user's sparse content-to-score map. Provides the per-user statistics
/// the pipeline is built from: mean, mean-centering, and magnitude.
pub use recommender::profile::RatingProfile;

/// Content Identifier
/// A category letter plus a numeric suffix (`"A12"`), ordered by category
/// first and suffix numerically second, so `"A2" < "A10"`.
pub use recommender::content::ContentId;

/// Similarity Engine Trait
/// A trait that defines how one candidate profile is scored against the
/// target profile.
///
/// By implementing this trait, you can plug a different similarity measure
/// into `Recommender<S, E>`. The provided `MeanCenteredCosine` engine
/// computes cosine similarity with a shared-content numerator over
/// full-vector magnitudes.
pub use recommender::engine::{MeanCenteredCosine, SimilarityEngine};

/// Evaluation artifacts
/// Data structures for the results of one evaluation run:
/// - `Evaluation`: the target's centered scores, its neighbors, and its
///   recommendations, as one serializable value
/// - `SimilarityRanking` / `SimilarityEntry`: ranked similar users
/// - `Recommendations` / `RecommendationEntry`: ranked recommended content
pub use recommender::evaluate::{
    Evaluation, RecommendationEntry, Recommendations, SimilarityEntry, SimilarityRanking,
};

/// Error type covering ingestion and evaluation failures.
pub use error::RecommendError;
