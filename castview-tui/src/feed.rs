use castview_types::{Cast, FeedMode, ReactionRecord};

/// Fixed page size for both feed endpoints.
pub const FEED_PAGE_SIZE: u32 = 25;

/// Identity of a feed request: the (fid, mode) pair active when the fetch
/// was dispatched.
///
/// A result is applied only while its tag still equals the active pair;
/// anything else is stale and discarded on arrival. The underlying request
/// is never cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedTag {
    pub fid: u64,
    pub mode: FeedMode,
}

impl FeedTag {
    pub fn new(fid: u64, mode: FeedMode) -> Self {
        Self { fid, mode }
    }
}

/// Raw result of a feed fetch, still in the shape of whichever endpoint
/// produced it. `normalize` is the single point that projects both shapes
/// into one row sequence; nothing else branches on the payload shape.
#[derive(Debug, Clone)]
pub enum FeedPayload {
    Casts(Vec<Cast>),
    Likes(Vec<ReactionRecord>),
}

impl FeedPayload {
    pub fn mode(&self) -> FeedMode {
        match self {
            FeedPayload::Casts(_) => FeedMode::Casts,
            FeedPayload::Likes(_) => FeedMode::Likes,
        }
    }

    /// Project the payload into the uniform row sequence.
    ///
    /// Casts pass through untouched. Likes project each reaction record to
    /// its inner cast, keeping the record order (recency of the like, not of
    /// the cast) and keeping duplicates: one row per record.
    pub fn normalize(self) -> Vec<Cast> {
        match self {
            FeedPayload::Casts(casts) => casts,
            FeedPayload::Likes(records) => {
                records.into_iter().map(|record| record.cast).collect()
            }
        }
    }
}
