use std::cmp::Ordering;

use log::debug;
use num::Float;
use serde::Serialize;

use crate::error::RecommendError;
use crate::recommender::engine::SimilarityEngine;
use crate::recommender::Recommender;

/// A scored candidate user.
///
/// The similarity is not clamped; with mean-centered inputs it lies in
/// `[-1, 1]` up to floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityEntry<S = f64> {
    pub user: usize,
    pub similarity: S,
}

/// Ranked similarity list, most similar user first.
///
/// The order is a deterministic total order: descending similarity, ties
/// broken by ascending user id. Consumers read a prefix of it via
/// [`SimilarityRanking::top`].
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityRanking<S = f64> {
    pub list: Vec<SimilarityEntry<S>>,
}

impl<S> SimilarityRanking<S>
where
    S: Float,
{
    pub(crate) fn from_unsorted(mut list: Vec<SimilarityEntry<S>>) -> Self {
        // NaN admits no total order; it can only arrive from non-finite input
        list.retain(|entry| !entry.similarity.is_nan());
        list.sort_by(|a, b| match b.similarity.partial_cmp(&a.similarity) {
            Some(Ordering::Equal) | None => a.user.cmp(&b.user),
            Some(order) => order,
        });
        SimilarityRanking { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimilarityEntry<S>> {
        self.list.iter()
    }

    /// The best `count` entries, or all of them when fewer are available.
    pub fn top(&self, count: usize) -> &[SimilarityEntry<S>] {
        &self.list[..count.min(self.list.len())]
    }
}

impl<S, E> Recommender<S, E>
where
    S: Float,
    E: SimilarityEngine<S>,
{
    /// Rank every user other than `target` by similarity to the target.
    ///
    /// Candidates with a zero-magnitude centered vector are excluded from the
    /// result entirely. An out-of-range target fails with
    /// [`RecommendError::TargetOutOfRange`] before any scoring happens.
    pub fn rank_similar(&self, target: usize) -> Result<SimilarityRanking<S>, RecommendError> {
        let target_profile =
            self.matrix()
                .profile(target)
                .ok_or(RecommendError::TargetOutOfRange {
                    target,
                    user_count: self.user_count(),
                })?;
        // computed once, reused for every candidate
        let target_magnitude = target_profile.magnitude();

        let entries: Vec<SimilarityEntry<S>> = self
            .matrix()
            .profiles()
            .enumerate()
            .filter(|(user, _)| *user != target)
            .filter_map(|(user, candidate)| {
                E::similarity(target_profile, target_magnitude, candidate)
                    .map(|similarity| SimilarityEntry { user, similarity })
            })
            .collect();
        debug!(
            "scored {} of {} candidates for target user {}",
            entries.len(),
            self.user_count().saturating_sub(1),
            target
        );
        Ok(SimilarityRanking::from_unsorted(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::content::ContentId;
    use crate::recommender::matrix::RatingMatrix;

    fn id(token: &str) -> ContentId {
        token.parse().expect("token should parse")
    }

    fn matrix(users: &[&[(&str, f64)]]) -> RatingMatrix {
        let mut matrix = RatingMatrix::with_user_count(users.len());
        for (user, ratings) in users.iter().enumerate() {
            for (token, score) in ratings.iter() {
                matrix.insert(user, id(token), *score).expect("user in range");
            }
        }
        matrix
    }

    #[test]
    fn ranks_the_worked_example() {
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 5.0), ("A2", 3.0)],
            &[("A1", 4.0), ("A2", 2.0), ("A3", 4.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");

        assert_eq!(ranking.len(), 1);
        let entry = ranking.list[0];
        assert_eq!(entry.user, 1);
        assert!((entry.similarity - 3.0_f64.sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn sorts_descending_with_user_id_tie_break() {
        // users 1 and 3 rate identically, user 2 is opposite
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 5.0), ("A2", 1.0)],
            &[("A1", 4.0), ("A2", 2.0)],
            &[("A1", 1.0), ("A2", 5.0)],
            &[("A1", 4.0), ("A2", 2.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");

        let order: Vec<usize> = ranking.iter().map(|entry| entry.user).collect();
        assert_eq!(order, [1, 3, 2], "ties must break by ascending user id");
        assert!(ranking.list[0].similarity >= ranking.list[1].similarity);
        assert!(ranking.list[1].similarity > ranking.list[2].similarity);
        assert_eq!(ranking.list[0].similarity, ranking.list[1].similarity);
    }

    #[test]
    fn excludes_zero_magnitude_candidates() {
        // user 1 has no ratings, user 2 rates uniformly (centers to zero)
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 5.0), ("A2", 1.0)],
            &[],
            &[("A1", 3.0), ("A2", 3.0)],
            &[("A1", 1.0), ("A2", 4.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");

        let users: Vec<usize> = ranking.iter().map(|entry| entry.user).collect();
        assert_eq!(users, [3], "users 1 and 2 carry no similarity signal");
    }

    #[test]
    fn zero_magnitude_target_yields_an_empty_ranking() {
        let recommender: Recommender = Recommender::new(matrix(&[
            &[],
            &[("A1", 5.0), ("A2", 1.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");
        assert!(ranking.is_empty());
    }

    #[test]
    fn rejects_an_out_of_range_target() {
        let recommender: Recommender =
            Recommender::new(matrix(&[&[("A1", 5.0)], &[("A1", 3.0)]]));
        let result = recommender.rank_similar(7);
        assert!(matches!(
            result,
            Err(RecommendError::TargetOutOfRange {
                target: 7,
                user_count: 2
            })
        ));
    }

    #[test]
    fn top_degrades_to_the_available_count() {
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 5.0), ("A2", 1.0)],
            &[("A1", 4.0), ("A2", 2.0)],
            &[("A1", 2.0), ("A2", 4.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");

        assert_eq!(ranking.top(10).len(), 2);
        assert_eq!(ranking.top(1).len(), 1);
        assert!(ranking.top(0).is_empty());
    }
}
