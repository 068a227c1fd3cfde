use thiserror::Error;

/// Failure conditions of ingestion and evaluation.
///
/// Every condition is a distinct variant so callers can match on it. The one
/// case the pipeline handles without an error is the zero-magnitude exclusion
/// during similarity ranking (see `SimilarityEngine`).
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The record stream ended in the middle of a `<user> <content> <score>` triple.
    #[error("ratings input ended in the middle of a record")]
    TruncatedInput,

    #[error("invalid user count {token:?}")]
    InvalidUserCount { token: String },

    #[error("invalid user id {token:?}")]
    InvalidUserId { token: String },

    #[error("invalid content id {token:?}, expected a category letter and a numeric suffix")]
    InvalidContentId { token: String },

    #[error("invalid score {token:?}")]
    InvalidScore { token: String },

    /// A rating record names a user id outside `[0, user_count)`. Ingestion
    /// fails the whole run on this instead of dropping the record.
    #[error("user id {user} is out of range for a matrix of {user_count} users")]
    UserOutOfRange { user: usize, user_count: usize },

    #[error("target user {target} is out of range for a matrix of {user_count} users")]
    TargetOutOfRange { target: usize, user_count: usize },
}
