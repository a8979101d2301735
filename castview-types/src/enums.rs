use serde::{Deserialize, Serialize};

/// Which activity feed is shown on a profile page.
///
/// The mode decides both the upstream endpoint and the normalization rule
/// applied to its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedMode {
    #[default]
    Casts,
    Likes,
}

impl FeedMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedMode::Casts => "casts",
            FeedMode::Likes => "likes",
        }
    }

    /// Tab label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            FeedMode::Casts => "Casts",
            FeedMode::Likes => "Likes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "casts" => Some(FeedMode::Casts),
            "likes" => Some(FeedMode::Likes),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FeedMode::Casts => FeedMode::Likes,
            FeedMode::Likes => FeedMode::Casts,
        }
    }

    pub fn previous(&self) -> Self {
        // Two modes, so cycling either way lands on the other one
        self.next()
    }

    pub const ALL: [FeedMode; 2] = [FeedMode::Casts, FeedMode::Likes];
}

/// Reaction kinds the reactions endpoint can be queried for.
///
/// Only likes are surfaced in the profile view, but the wire value is an
/// enum upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Recast,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Recast => "recast",
        }
    }

    /// Query-parameter form used by the reactions endpoint.
    pub fn as_query(&self) -> &'static str {
        match self {
            ReactionKind::Like => "likes",
            ReactionKind::Recast => "recasts",
        }
    }
}
