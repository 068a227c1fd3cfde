use std::cmp::Ordering;

use indexmap::IndexMap;
use log::debug;
use num::Float;
use serde::Serialize;

use crate::error::RecommendError;
use crate::recommender::content::ContentId;
use crate::recommender::engine::SimilarityEngine;
use crate::recommender::Recommender;

use super::similarity::SimilarityRanking;

/// One recommended content item with its aggregated score.
///
/// The content is guaranteed to be absent from the target user's own profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationEntry<S = f64> {
    pub content: ContentId,
    pub score: S,
}

/// Ranked recommendation list, best content first: descending aggregated
/// score, ties broken by ascending content id.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations<S = f64> {
    pub list: Vec<RecommendationEntry<S>>,
}

impl<S> Recommendations<S> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecommendationEntry<S>> {
        self.list.iter()
    }
}

impl<S, E> Recommender<S, E>
where
    S: Float,
    E: SimilarityEngine<S>,
{
    /// Aggregate recommendations for `target` from the best
    /// `reference_count` entries of `ranking`.
    ///
    /// Each reference user contributes `similarity * score` for every content
    /// item it rated that the target has not; contributions for the same
    /// content accumulate across reference users, and the accumulation is
    /// order-independent. At most `result_count` entries are returned; when
    /// fewer distinct content items qualify, all of them are returned.
    pub fn recommend_from(
        &self,
        ranking: &SimilarityRanking<S>,
        target: usize,
        reference_count: usize,
        result_count: usize,
    ) -> Result<Recommendations<S>, RecommendError> {
        let user_count = self.user_count();
        let target_profile =
            self.matrix()
                .profile(target)
                .ok_or(RecommendError::TargetOutOfRange { target, user_count })?;

        let mut accumulator: IndexMap<ContentId, S> = IndexMap::new();
        for entry in ranking.top(reference_count) {
            let reference = self.matrix().profile(entry.user).ok_or(
                RecommendError::UserOutOfRange {
                    user: entry.user,
                    user_count,
                },
            )?;
            for (content, score) in reference.iter() {
                if target_profile.contains(&content) {
                    continue;
                }
                let slot = accumulator.entry(content).or_insert_with(S::zero);
                *slot = *slot + entry.similarity * score;
            }
        }
        debug!(
            "aggregated {} candidate contents from {} reference users",
            accumulator.len(),
            ranking.top(reference_count).len()
        );

        let mut list: Vec<RecommendationEntry<S>> = accumulator
            .into_iter()
            .map(|(content, score)| RecommendationEntry { content, score })
            .collect();
        list.retain(|entry| !entry.score.is_nan());
        list.sort_by(|a, b| match b.score.partial_cmp(&a.score) {
            Some(Ordering::Equal) | None => a.content.cmp(&b.content),
            Some(order) => order,
        });
        list.truncate(result_count);
        Ok(Recommendations { list })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::evaluate::similarity::SimilarityEntry;
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

    fn ranking(entries: &[(usize, f64)]) -> SimilarityRanking {
        SimilarityRanking {
            list: entries
                .iter()
                .map(|&(user, similarity)| SimilarityEntry { user, similarity })
                .collect(),
        }
    }

    /// Matrix where centering keeps the scores easy to follow. Each block of
    /// ratings below already sums to zero per user, so centering is a no-op.
    fn centered_fixture() -> Recommender {
        Recommender::new(matrix(&[
            &[("A1", 1.0), ("A2", -1.0)],
            &[("A1", 1.0), ("B1", 2.0), ("B2", -3.0)],
            &[("A2", 1.0), ("B1", 1.0), ("B2", -2.0)],
        ]))
    }

    #[test]
    fn skips_content_the_target_already_rated() {
        let recommender = centered_fixture();
        let ranking = ranking(&[(1, 1.0), (2, 0.5)]);
        let recommendations = recommender
            .recommend_from(&ranking, 0, 2, 10)
            .expect("target 0 is in range");

        let contents: Vec<String> = recommendations
            .iter()
            .map(|entry| entry.content.to_string())
            .collect();
        assert!(!contents.contains(&"A1".to_string()));
        assert!(!contents.contains(&"A2".to_string()));
        assert_eq!(contents.len(), 2);
    }

    #[test]
    fn accumulates_weighted_contributions_across_references() {
        let recommender = centered_fixture();
        let ranking = ranking(&[(1, 1.0), (2, 0.5)]);
        let recommendations = recommender
            .recommend_from(&ranking, 0, 2, 10)
            .expect("target 0 is in range");

        // B1: 1.0 * 2.0 + 0.5 * 1.0 = 2.5, B2: 1.0 * -3.0 + 0.5 * -2.0 = -4.0
        let b1 = recommendations
            .iter()
            .find(|entry| entry.content == id("B1"))
            .expect("B1 is recommendable");
        let b2 = recommendations
            .iter()
            .find(|entry| entry.content == id("B2"))
            .expect("B2 is recommendable");
        assert!((b1.score - 2.5).abs() < 1e-9);
        assert!((b2.score + 4.0).abs() < 1e-9);
    }

    #[test]
    fn aggregation_is_invariant_under_reference_order() {
        let recommender = centered_fixture();
        let forward = recommender
            .recommend_from(&ranking(&[(1, 1.0), (2, 0.5)]), 0, 2, 10)
            .expect("target 0 is in range");
        let backward = recommender
            .recommend_from(&ranking(&[(2, 0.5), (1, 1.0)]), 0, 2, 10)
            .expect("target 0 is in range");

        assert_eq!(forward.list, backward.list);
    }

    #[test]
    fn orders_by_score_then_content_id() {
        // the reference gives C2 and C10 identical scores
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 1.0), ("A2", -1.0)],
            &[("C10", 1.0), ("C2", 1.0), ("B5", 3.0), ("B6", -5.0)],
        ]));
        let recommendations = recommender
            .recommend_from(&ranking(&[(1, 1.0)]), 0, 1, 10)
            .expect("target 0 is in range");

        let contents: Vec<String> = recommendations
            .iter()
            .map(|entry| entry.content.to_string())
            .collect();
        assert_eq!(contents, ["B5", "C2", "C10", "B6"]);
    }

    #[test]
    fn zero_reference_count_yields_nothing() {
        let recommender = centered_fixture();
        let recommendations = recommender
            .recommend_from(&ranking(&[(1, 1.0), (2, 0.5)]), 0, 0, 10)
            .expect("target 0 is in range");
        assert!(recommendations.is_empty());
    }

    #[test]
    fn result_count_larger_than_candidates_returns_them_all() {
        let recommender = centered_fixture();
        let recommendations = recommender
            .recommend_from(&ranking(&[(1, 1.0), (2, 0.5)]), 0, 2, 100)
            .expect("target 0 is in range");
        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn result_count_truncates_the_ranked_list() {
        let recommender = centered_fixture();
        let recommendations = recommender
            .recommend_from(&ranking(&[(1, 1.0), (2, 0.5)]), 0, 2, 1)
            .expect("target 0 is in range");
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations.list[0].content, id("B1"));
    }

    #[test]
    fn target_that_rated_everything_gets_nothing() {
        let recommender: Recommender = Recommender::new(matrix(&[
            &[("A1", 5.0), ("A2", 3.0), ("B1", 1.0)],
            &[("A1", 4.0), ("B1", 2.0)],
        ]));
        let ranking = recommender.rank_similar(0).expect("target 0 is in range");
        let recommendations = recommender
            .recommend_from(&ranking, 0, 1, 10)
            .expect("target 0 is in range");
        assert!(recommendations.is_empty());
    }

    #[test]
    fn rejects_a_ranking_entry_with_an_unknown_user() {
        let recommender = centered_fixture();
        let result = recommender.recommend_from(&ranking(&[(9, 1.0)]), 0, 1, 10);
        assert!(matches!(
            result,
            Err(RecommendError::UserOutOfRange {
                user: 9,
                user_count: 3
            })
        ));
    }
}
