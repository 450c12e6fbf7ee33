//! Followable entities: users, hashtags, universities.
//!
//! Hashtags are identified by name and normalized on construction so that
//! every status lookup and follow/unfollow call sees the same canonical
//! form; users and universities are identified by numeric id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{UniversityId, UserId};

/// Entity categories the server can follow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FollowKind {
    User,
    Hashtag,
    University,
}

impl FollowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowKind::User => "user",
            FollowKind::Hashtag => "hashtag",
            FollowKind::University => "university",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown follow kind: {0}")]
pub struct ParseFollowKindError(String);

impl std::str::FromStr for FollowKind {
    type Err = ParseFollowKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(FollowKind::User),
            "hashtag" => Ok(FollowKind::Hashtag),
            "university" => Ok(FollowKind::University),
            other => Err(ParseFollowKindError(other.to_string())),
        }
    }
}

/// A canonical hashtag name: no leading `#`, no surrounding whitespace,
/// lowercase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HashtagName(String);

impl HashtagName {
    /// Normalize raw user input into a canonical tag name.
    ///
    /// `"  #Foo "`, `"#foo"` and `"foo"` all map to `"foo"`.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let stripped = trimmed.trim_start_matches('#');
        Self(stripped.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for HashtagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One followable entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum FollowTarget {
    User(UserId),
    Hashtag(HashtagName),
    University(UniversityId),
}

impl FollowTarget {
    /// Build a hashtag target from raw input, normalizing the name.
    pub fn hashtag(raw: &str) -> Self {
        FollowTarget::Hashtag(HashtagName::new(raw))
    }

    pub fn kind(&self) -> FollowKind {
        match self {
            FollowTarget::User(_) => FollowKind::User,
            FollowTarget::Hashtag(_) => FollowKind::Hashtag,
            FollowTarget::University(_) => FollowKind::University,
        }
    }

    /// The identifier as it appears in endpoint paths: numeric id for
    /// users and universities, canonical name for hashtags.
    pub fn path_id(&self) -> String {
        match self {
            FollowTarget::User(id) => id.to_string(),
            FollowTarget::Hashtag(name) => name.as_str().to_string(),
            FollowTarget::University(id) => id.to_string(),
        }
    }
}

impl std::fmt::Display for FollowTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowTarget::Hashtag(name) => write!(f, "#{name}"),
            other => write!(f, "{}:{}", other.kind().as_str(), other.path_id()),
        }
    }
}
