use std::collections::HashMap;

use castview_types::Profile;

/// In-memory store of profiles seen this session, keyed by fid.
///
/// The cache is owned by the application state and written only from the
/// event loop, so it needs no locking. Entries are upserted opportunistically
/// whenever a lookup returns and are never evicted.
#[derive(Debug, Default)]
pub struct ProfileCache {
    entries: HashMap<u64, Profile>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or merge a profile by fid. Scalar fields take the newest
    /// payload; optional fields keep the stored value when the new payload
    /// omits them, so a viewer-less lookup cannot erase viewer context.
    ///
    /// Upserting the same payload twice leaves the same stored state as
    /// upserting it once.
    pub fn upsert(&mut self, profile: Profile) {
        match self.entries.get_mut(&profile.fid) {
            Some(existing) => {
                existing.username = profile.username;
                existing.display_name = profile.display_name;
                existing.follower_count = profile.follower_count;
                existing.following_count = profile.following_count;
                if profile.pfp_url.is_some() {
                    existing.pfp_url = profile.pfp_url;
                }
                if profile.bio.is_some() {
                    existing.bio = profile.bio;
                }
                if profile.viewer_following.is_some() {
                    existing.viewer_following = profile.viewer_following;
                }
            }
            None => {
                self.entries.insert(profile.fid, profile);
            }
        }
    }

    /// Most recent stored value for a fid, if any.
    pub fn get(&self, fid: u64) -> Option<&Profile> {
        self.entries.get(&fid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(fid: u64, username: &str) -> Profile {
        Profile {
            fid,
            username: username.to_string(),
            display_name: username.to_uppercase(),
            pfp_url: None,
            bio: None,
            follower_count: 10,
            following_count: 5,
            viewer_following: None,
        }
    }

    #[test]
    fn test_upsert_inserts_when_absent() {
        let mut cache = ProfileCache::new();
        cache.upsert(profile(3, "dwr"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(3).unwrap().username, "dwr");
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut cache = ProfileCache::new();
        let p = profile(3, "dwr");

        cache.upsert(p.clone());
        let once = cache.get(3).unwrap().clone();

        cache.upsert(p);
        let twice = cache.get(3).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(once.username, twice.username);
        assert_eq!(once.follower_count, twice.follower_count);
        assert_eq!(once.viewer_following, twice.viewer_following);
    }

    #[test]
    fn test_upsert_merges_newest_scalar_fields() {
        let mut cache = ProfileCache::new();
        cache.upsert(profile(3, "dwr"));

        let mut newer = profile(3, "dwr.eth");
        newer.follower_count = 99;
        cache.upsert(newer);

        let stored = cache.get(3).unwrap();
        assert_eq!(stored.username, "dwr.eth");
        assert_eq!(stored.follower_count, 99);
        assert_eq!(cache.len(), 1, "merge must not create a second entry");
    }

    #[test]
    fn test_upsert_keeps_viewer_context_when_new_payload_lacks_it() {
        let mut cache = ProfileCache::new();

        let mut enriched = profile(3, "dwr");
        enriched.viewer_following = Some(true);
        cache.upsert(enriched);

        // A later lookup without viewer context omits the flag
        cache.upsert(profile(3, "dwr"));

        assert_eq!(cache.get(3).unwrap().viewer_following, Some(true));
    }

    #[test]
    fn test_cache_is_keyed_by_fid_not_handle() {
        let mut cache = ProfileCache::new();
        cache.upsert(profile(3, "samehandle"));
        cache.upsert(profile(7, "samehandle"));

        // Same handle, distinct fids: two entries
        assert_eq!(cache.len(), 2);

        // A handle change on one fid stays one entry
        cache.upsert(profile(3, "renamed"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(3).unwrap().username, "renamed");
        assert_eq!(cache.get(7).unwrap().username, "samehandle");
    }
}
