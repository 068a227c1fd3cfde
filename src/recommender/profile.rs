use indexmap::IndexMap;
use num::Float;
use serde::{Deserialize, Serialize};

use super::content::ContentId;

/// One user's sparse rating profile, a content id to score map.
///
/// An absent key means the content is unrated. Entries are kept in insertion
/// order; the category-then-numeric ordering of content ids is a presentation
/// concern and is applied by [`RatingProfile::sorted_scores`] at output time.
///
/// Scores start out as raw ratings. After [`RatingProfile::mean_center`] they
/// are mean-centered and may be negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingProfile<S = f64> {
    scores: IndexMap<ContentId, S>,
}

impl<S> RatingProfile<S> {
    pub fn new() -> Self {
        RatingProfile {
            scores: IndexMap::new(),
        }
    }

    /// Number of rated content items.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn contains(&self, content: &ContentId) -> bool {
        self.scores.contains_key(content)
    }

    pub fn contents(&self) -> impl Iterator<Item = &ContentId> {
        self.scores.keys()
    }
}

impl<S> Default for RatingProfile<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RatingProfile<S>
where
    S: Float,
{
    /// Record a score, overwriting any earlier score for the same content.
    pub fn rate(&mut self, content: ContentId, score: S) {
        self.scores.insert(content, score);
    }

    pub fn score(&self, content: &ContentId) -> Option<S> {
        self.scores.get(content).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContentId, S)> + '_ {
        self.scores.iter().map(|(content, score)| (*content, *score))
    }

    /// Arithmetic mean over the rated items only, not over all content that
    /// exists. `None` for a profile with no ratings.
    pub fn mean(&self) -> Option<S> {
        if self.scores.is_empty() {
            return None;
        }
        let total = self.scores.values().fold(S::zero(), |acc, &s| acc + s);
        let count = S::from(self.scores.len()).unwrap_or_else(S::one);
        Some(total / count)
    }

    /// Subtract the profile mean from every score, in place.
    ///
    /// A profile with no ratings has no mean and is left untouched, so no
    /// NaN can leak into later arithmetic.
    pub fn mean_center(&mut self) {
        if let Some(mean) = self.mean() {
            for score in self.scores.values_mut() {
                *score = *score - mean;
            }
        }
    }

    /// Euclidean magnitude over the full rated set.
    pub fn magnitude(&self) -> S {
        self.scores
            .values()
            .fold(S::zero(), |acc, &s| acc + s * s)
            .sqrt()
    }

    /// Scores ordered by the content id comparator, for presentation.
    pub fn sorted_scores(&self) -> Vec<(ContentId, S)> {
        let mut scores: Vec<(ContentId, S)> = self.iter().collect();
        scores.sort_by(|a, b| a.0.cmp(&b.0));
        scores
    }
}
