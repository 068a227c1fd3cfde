use log::debug;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::error::RecommendError;

use super::content::ContentId;
use super::profile::RatingProfile;

/// The sparse rating matrix: one [`RatingProfile`] per user, indexed by user
/// id in `[0, user_count)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingMatrix<S = f64> {
    users: Vec<RatingProfile<S>>,
}

impl<S> RatingMatrix<S>
where
    S: Float,
{
    /// Create a matrix of `user_count` users with no ratings.
    pub fn with_user_count(user_count: usize) -> Self {
        RatingMatrix {
            users: (0..user_count).map(|_| RatingProfile::new()).collect(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Record one rating triple. A later triple for the same (user, content)
    /// pair overwrites the earlier score.
    ///
    /// A user id at or past `user_count` fails the whole run with
    /// [`RecommendError::UserOutOfRange`]; records are never dropped silently.
    pub fn insert(
        &mut self,
        user: usize,
        content: ContentId,
        score: S,
    ) -> Result<(), RecommendError> {
        let user_count = self.users.len();
        let profile = self
            .users
            .get_mut(user)
            .ok_or(RecommendError::UserOutOfRange { user, user_count })?;
        profile.rate(content, score);
        Ok(())
    }

    pub fn profile(&self, user: usize) -> Option<&RatingProfile<S>> {
        self.users.get(user)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &RatingProfile<S>> {
        self.users.iter()
    }

    /// Mean-center every user's scores in place. Destructive: the raw scores
    /// are not retained. Users with no ratings are skipped.
    pub fn mean_center_all(&mut self) {
        for profile in &mut self.users {
            profile.mean_center();
        }
        debug!("mean-centered {} user profiles", self.users.len());
    }
}
