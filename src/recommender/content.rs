use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RecommendError;

/// Identifier of a content item.
///
/// A content id token has a fixed two-part structure: a leading category
/// letter and a numeric suffix, e.g. `"A12"`. Ordering compares the category
/// letter first and the suffix numerically second, so `"A2" < "A10"` (this is
/// not plain string order). Tokens whose suffixes differ only in leading
/// zeros, like `"A7"` and `"A007"`, name the same content.
///
/// # Examples
/// ```
/// use cf_recommender::ContentId;
/// let a2: ContentId = "A2".parse().unwrap();
/// let a10: ContentId = "A10".parse().unwrap();
/// assert!(a2 < a10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId {
    // field order drives the derived Ord: category letter, then suffix
    category: char,
    number: u32,
}

impl ContentId {
    /// The leading category letter.
    pub fn category(&self) -> char {
        self.category
    }

    /// The numeric suffix.
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl FromStr for ContentId {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let category = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c,
            _ => {
                return Err(RecommendError::InvalidContentId {
                    token: s.to_string(),
                })
            }
        };
        let number = chars
            .as_str()
            .parse::<u32>()
            .map_err(|_| RecommendError::InvalidContentId {
                token: s.to_string(),
            })?;
        Ok(ContentId { category, number })
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category, self.number)
    }
}

impl Serialize for ContentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
