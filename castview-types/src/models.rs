use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ReactionKind;

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A Farcaster identity as returned by the user lookup endpoints.
///
/// The numeric `fid` is the only stable join key; usernames are unique but
/// mutable upstream and must never be used for caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub fid: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub pfp_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    /// Whether the configured viewer follows this profile. Only present on
    /// lookups made with a viewer fid.
    #[serde(default)]
    pub viewer_following: Option<bool>,
}

/// Condensed author record embedded in every cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastAuthor {
    pub fid: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub pfp_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastReactions {
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub recasts_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyCount {
    #[serde(default)]
    pub count: u64,
}

/// Channel a cast was posted in, when any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One unit of feed content.
///
/// The content hash is the stable identifier. Ordering inside a feed page is
/// upstream-provided recency order and is preserved as-is by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    pub hash: String,
    pub author: CastAuthor,
    pub text: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub reactions: CastReactions,
    #[serde(default)]
    pub replies: ReplyCount,
    #[serde(default)]
    pub channel: Option<Channel>,
}

/// A reaction record from the reactions endpoint, wrapping the cast the
/// reaction targets. Record order reflects recency of the reaction, not of
/// the cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub reaction_type: ReactionKind,
    pub cast: Cast,
    #[serde(default, with = "option_datetime_format")]
    pub reaction_timestamp: Option<DateTime<Utc>>,
}

mod option_datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&d.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => s
                .parse::<DateTime<Utc>>()
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

// Response envelopes for the aggregation API

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: Profile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkUsersResponse {
    pub users: Vec<Profile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub casts: Vec<Cast>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReactionsResponse {
    pub reactions: Vec<ReactionRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FollowRequest {
    pub target_fid: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
