//! Ratings ingestion from the whitespace-delimited record format.
//!
//! The first token of a stream declares the user count `N`. Every following
//! group of three tokens is one `<user> <content> <score>` record; records
//! may be split across lines arbitrarily and arrive in any order. A later
//! record for the same (user, content) pair overwrites the earlier score.
//!
//! Parsing fails fast on the first malformed token and does not attempt
//! partial recovery.

use std::io::Read;
use std::str::FromStr;

use log::debug;
use num::Float;

use crate::error::RecommendError;
use crate::recommender::matrix::RatingMatrix;

/// Parse a complete ratings stream from `text`.
pub fn parse_ratings<S>(text: &str) -> Result<RatingMatrix<S>, RecommendError>
where
    S: Float + FromStr,
{
    let mut tokens = text.split_whitespace();
    let count_token = tokens.next().ok_or(RecommendError::TruncatedInput)?;
    let user_count: usize =
        count_token
            .parse()
            .map_err(|_| RecommendError::InvalidUserCount {
                token: count_token.to_string(),
            })?;

    let mut matrix = RatingMatrix::with_user_count(user_count);
    let mut record_count = 0usize;
    while let Some(user_token) = tokens.next() {
        let content_token = tokens.next().ok_or(RecommendError::TruncatedInput)?;
        let score_token = tokens.next().ok_or(RecommendError::TruncatedInput)?;

        let user: usize = user_token
            .parse()
            .map_err(|_| RecommendError::InvalidUserId {
                token: user_token.to_string(),
            })?;
        let content = content_token.parse()?;
        let score: S = score_token
            .parse()
            .map_err(|_| RecommendError::InvalidScore {
                token: score_token.to_string(),
            })?;

        matrix.insert(user, content, score)?;
        record_count += 1;
    }
    debug!("ingested {record_count} rating records for {user_count} users");
    Ok(matrix)
}

/// Read `reader` to the end and parse it as a ratings stream.
pub fn read_ratings<S, R>(mut reader: R) -> Result<RatingMatrix<S>, RecommendError>
where
    S: Float + FromStr,
    R: Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_ratings(&text)
}
