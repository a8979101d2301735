use std::time::{Duration, Instant};

use castview_types::{FeedMode, Profile};
use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{ApiClient, ApiError};
use crate::cache::ProfileCache;
use crate::feed::{FeedPayload, FeedTag, FEED_PAGE_SIZE};
use crate::resolve::{ResolutionError, SlugToken};
use crate::{log_api_call, log_feed};

pub mod state;
pub use state::*;
pub mod handlers;


/// Results posted back to the event loop by spawned fetch tasks.
///
/// All state mutation happens on the event loop when an action is applied;
/// the tasks themselves never touch `App`.
#[derive(Debug)]
pub enum Action {
    ProfileResolved(Result<Box<Profile>, ResolutionError>),
    ProfileEnriched(Box<Profile>),
    EnrichmentFailed(ApiError),
    FeedLoaded {
        tag: FeedTag,
        result: Result<FeedPayload, ApiError>,
    },
    FollowUpdated {
        fid: u64,
        following: bool,
        result: Result<(), ApiError>,
    },
}

/// Resolve a route token into a profile with a single upstream lookup.
///
/// Numeric tokens go through the bulk-by-fid endpoint (which carries viewer
/// context), handles through the by-username endpoint.
pub async fn resolve_profile(
    client: &ApiClient,
    slug: &SlugToken,
    viewer_fid: u64,
) -> Result<Profile, ResolutionError> {
    match slug {
        SlugToken::Fid(fid) => {
            let users = client.lookup_users_by_fids(&[*fid], viewer_fid).await?;
            users
                .into_iter()
                .next()
                .ok_or_else(|| ResolutionError::NotFound(slug.display()))
        }
        SlugToken::Handle(handle) => match client.lookup_user_by_username(handle).await {
            Ok(profile) => Ok(profile),
            Err(ApiError::NotFound(_)) => Err(ResolutionError::NotFound(slug.display())),
            Err(e) => Err(e.into()),
        },
    }
}

impl App {
    pub fn new(
        api_client: ApiClient,
        viewer_fid: u64,
        slug: SlugToken,
        action_tx: UnboundedSender<Action>,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::Loading,
            api_client,
            viewer_fid,
            slug,
            profile: None,
            page_error: None,
            feed: FeedState::new(),
            profile_cache: ProfileCache::new(),
            show_help: false,
            status: None,
            follow_in_flight: false,
            log_config: crate::logging::LogConfig::default(),
            action_tx,
        }
    }

    /// Kick off identity resolution for the configured slug. Called once,
    /// right after construction.
    pub fn start(&mut self) {
        let client = self.api_client.clone();
        let slug = self.slug.clone();
        let viewer_fid = self.viewer_fid;
        let tx = self.action_tx.clone();
        log_api_call!(self.log_config, "resolving profile for {}", slug.display());
        tokio::spawn(async move {
            let result = resolve_profile(&client, &slug, viewer_fid).await;
            let _ = tx.send(Action::ProfileResolved(result.map(Box::new)));
        });
    }

    /// Apply one fetched result to the application state.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::ProfileResolved(Ok(profile)) => {
                let fid = profile.fid;
                self.profile = Some(*profile);
                self.screen = Screen::Profile;
                self.page_error = None;

                let tag = FeedTag::new(fid, self.feed.mode);
                self.feed.current_tag = Some(tag);
                self.feed.selection.reset(self.feed.casts.len());
                self.request_feed(tag);
                self.request_enrichment(fid);
            }
            Action::ProfileResolved(Err(e)) => {
                log::error!("failed to resolve {}: {}", self.slug.display(), e);
                self.screen = Screen::Error;
                self.page_error = Some(e.to_string());
            }
            Action::ProfileEnriched(profile) => {
                let fid = profile.fid;
                self.profile_cache.upsert(*profile);
                // Refresh the displayed header from the merged cache entry
                if self.profile.as_ref().map(|p| p.fid) == Some(fid) {
                    if let Some(merged) = self.profile_cache.get(fid) {
                        self.profile = Some(merged.clone());
                    }
                }
            }
            Action::EnrichmentFailed(e) => {
                // Non-fatal: the header keeps whatever resolution returned
                log::warn!("profile enrichment failed: {}", e);
            }
            Action::FeedLoaded { tag, result } => self.apply_feed_result(tag, result),
            Action::FollowUpdated {
                fid,
                following,
                result,
            } => {
                self.follow_in_flight = false;
                match result {
                    Ok(()) => {
                        if let Some(profile) = &mut self.profile {
                            if profile.fid == fid {
                                profile.viewer_following = Some(following);
                                self.profile_cache.upsert(profile.clone());
                                let verb = if following { "Followed" } else { "Unfollowed" };
                                let username = profile.username.clone();
                                self.set_status(format!("{} @{}", verb, username));
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("follow update for fid {} failed: {}", fid, e);
                        self.set_status(format!("Follow update failed: {}", e));
                    }
                }
            }
        }
    }

    /// Issue one tagged fetch for the given (fid, mode) pair.
    pub fn request_feed(&mut self, tag: FeedTag) {
        self.feed.loading = true;
        log_api_call!(
            self.log_config,
            "requesting {} feed for fid {}",
            tag.mode.as_str(),
            tag.fid
        );
        let client = self.api_client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = match tag.mode {
                FeedMode::Casts => client
                    .fetch_feed_by_authors(&[tag.fid], true, FEED_PAGE_SIZE)
                    .await
                    .map(FeedPayload::Casts),
                FeedMode::Likes => client
                    .fetch_liked_casts(tag.fid, FEED_PAGE_SIZE)
                    .await
                    .map(FeedPayload::Likes),
            };
            let _ = tx.send(Action::FeedLoaded { tag, result });
        });
    }

    /// Apply a feed result if its tag still matches the active pair.
    ///
    /// Stale results (the active pair moved on while the fetch was in
    /// flight) are dropped without any side effects. A failed fetch keeps
    /// the rows and selection already on screen.
    fn apply_feed_result(&mut self, tag: FeedTag, result: Result<FeedPayload, ApiError>) {
        if self.feed.current_tag != Some(tag) {
            log_feed!(
                self.log_config,
                "discarding stale {} result for fid {} (active: {:?})",
                tag.mode.as_str(),
                tag.fid,
                self.feed.current_tag
            );
            return;
        }

        match result {
            Ok(payload) => {
                self.feed.casts = payload.normalize();
                self.feed.selection.reset(self.feed.casts.len());
                self.feed.loading = false;
                log_feed!(
                    self.log_config,
                    "applied {} feed for fid {} ({} rows)",
                    tag.mode.as_str(),
                    tag.fid,
                    self.feed.casts.len()
                );
            }
            Err(e) => {
                self.feed.loading = false;
                log::warn!(
                    "{} feed fetch for fid {} failed: {}",
                    tag.mode.as_str(),
                    tag.fid,
                    e
                );
                self.set_status("Feed refresh failed (press r to retry)".to_string());
            }
        }
    }

    /// Opportunistic viewer-context lookup after resolution; the result is
    /// upserted into the profile cache. Failures are log-only.
    fn request_enrichment(&mut self, fid: u64) {
        let client = self.api_client.clone();
        let viewer_fid = self.viewer_fid;
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match client.lookup_users_by_fids(&[fid], viewer_fid).await {
                Ok(users) => {
                    if let Some(user) = users.into_iter().next() {
                        let _ = tx.send(Action::ProfileEnriched(Box::new(user)));
                    }
                }
                Err(e) => {
                    let _ = tx.send(Action::EnrichmentFailed(e));
                }
            }
        });
    }

    /// Switch the active feed mode. A no-op when the mode is unchanged;
    /// otherwise the selection resets and exactly one fetch is issued for
    /// the new (fid, mode) pair.
    pub fn set_feed_mode(&mut self, mode: FeedMode) {
        if self.feed.mode == mode {
            return;
        }
        self.feed.mode = mode;

        let Some(profile) = &self.profile else {
            // No identity yet; the fetch on resolution picks up this mode
            return;
        };
        let tag = FeedTag::new(profile.fid, mode);
        self.feed.current_tag = Some(tag);
        self.feed.selection.reset(self.feed.casts.len());
        self.request_feed(tag);
    }

    pub fn next_feed_mode(&mut self) {
        self.set_feed_mode(self.feed.mode.next());
    }

    pub fn previous_feed_mode(&mut self) {
        self.set_feed_mode(self.feed.mode.previous());
    }

    /// Re-request the active (fid, mode) pair, keeping current rows on
    /// screen until the new result lands.
    pub fn refresh_feed(&mut self) {
        if let Some(tag) = self.feed.current_tag {
            self.request_feed(tag);
        }
    }

    /// Explicit row activation from the list primitive. Clamped internally,
    /// so any index the primitive computes is safe here.
    pub fn activate_row(&mut self, index: usize) {
        self.feed.selection.set_index(index, self.feed.casts.len());
    }

    /// Toggle follow state for the viewed profile. Hidden for the viewer's
    /// own profile; only one follow request runs at a time.
    pub fn toggle_follow(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        if profile.fid == self.viewer_fid || self.follow_in_flight {
            return;
        }

        let fid = profile.fid;
        let currently_following = profile.viewer_following.unwrap_or(false);
        self.follow_in_flight = true;

        let client = self.api_client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = if currently_following {
                client.unfollow_user(fid).await
            } else {
                client.follow_user(fid).await
            };
            let _ = tx.send(Action::FollowUpdated {
                fid,
                following: !currently_following,
                result,
            });
        });
    }

    /// Open the first embed of the selected row in the system browser.
    pub fn open_selected_embed(&mut self) {
        let Some(url) = self
            .feed
            .selected_cast()
            .and_then(|cast| cast.embeds.first())
            .map(|embed| embed.url.clone())
        else {
            return;
        };
        if let Err(e) = webbrowser::open(&url) {
            log::warn!("failed to open {}: {}", url, e);
            self.set_status("Could not open embed in browser".to_string());
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some((message, Instant::now()));
    }

    /// Clear the status banner once it has been on screen for 3 seconds.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, timestamp)) = &self.status {
            if timestamp.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        handlers::handle_key_event(self, key);
    }
}
