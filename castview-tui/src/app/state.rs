use std::time::Instant;

use castview_types::{Cast, FeedMode, Profile};
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::ApiClient;
use crate::app::Action;
use crate::cache::ProfileCache;
use crate::feed::FeedTag;
use crate::resolve::SlugToken;

/// Which page-level view is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Identity resolution is still in flight.
    Loading,
    /// Resolution failed; the page shows the error and nothing else.
    Error,
    /// Profile header plus feed.
    Profile,
}

/// Bounds-checked selection over the current feed rows.
///
/// Wraps the list-widget state so every mutation path goes through the
/// clamped setters. The index is `None` exactly when the sequence is empty;
/// otherwise it always satisfies `0 <= index < len`.
#[derive(Debug, Default)]
pub struct FeedSelection {
    list_state: ListState,
}

impl FeedSelection {
    pub fn index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Set the index if it is in bounds, else leave the selection untouched.
    /// Safe to call with any value a list primitive might compute.
    pub fn set_index(&mut self, index: usize, len: usize) {
        if index < len {
            self.list_state.select(Some(index));
        }
    }

    /// Snap back to the first row, or to no selection when the sequence is
    /// empty. Called on every sequence replacement and mode/identity change.
    pub fn reset(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            None => 0,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Mutable widget state for rendering.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

/// Feed state: active mode, current rows and the staleness tag of the
/// authoritative request.
pub struct FeedState {
    pub mode: FeedMode,
    pub casts: Vec<Cast>,
    pub selection: FeedSelection,
    pub loading: bool,
    /// The (fid, mode) pair results must match to be applied. `None` until
    /// an identity has resolved.
    pub current_tag: Option<FeedTag>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            mode: FeedMode::Casts,
            casts: Vec::new(),
            selection: FeedSelection::default(),
            loading: false,
            current_tag: None,
        }
    }

    /// Row the selection points at, if any.
    pub fn selected_cast(&self) -> Option<&Cast> {
        self.selection.index().and_then(|i| self.casts.get(i))
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub api_client: ApiClient,
    /// Fid interaction counts are computed for. Falls back to the configured
    /// application default when no account is set.
    pub viewer_fid: u64,
    pub slug: SlugToken,
    pub profile: Option<Profile>,
    pub page_error: Option<String>,
    pub feed: FeedState,
    pub profile_cache: ProfileCache,
    pub show_help: bool,
    /// Transient status banner, auto-cleared after a few seconds.
    pub status: Option<(String, Instant)>,
    pub follow_in_flight: bool,
    pub log_config: crate::logging::LogConfig,
    pub(crate) action_tx: UnboundedSender<Action>,
}
