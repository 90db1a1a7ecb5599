//! Listing view controller.
//!
//! Owns the mutable [`AppState`] together with the two injected stores and
//! mediates every state change: filter edits, search issue/application,
//! detail navigation, and the {mounted, about_to_unmount, history_navigated}
//! lifecycle events. Records/filter changes while the listing is active are
//! saved to the navigation store automatically; a retrieval completing while
//! another view is active is discarded and never written there.

use crate::cache::CrossSessionCache;
use crate::resolver::{self, Resolution};
use crate::session::NavStateStore;
use crate::state::{
    ActiveView, AppState, DetailResponse, RequestKind, SearchFilters, SearchRequest,
    SearchResponse,
};

/// Orchestrates the listing and detail views over injected stores.
pub struct ViewController<C: CrossSessionCache, N: NavStateStore> {
    /// Mutable view state rendered by the UI layer.
    pub state: AppState,
    /// Cross-session bootstrap cache.
    cache: C,
    /// Navigation-scoped snapshot store.
    nav: N,
    /// Monotonic id source for retrieval requests.
    next_request_id: u64,
}

impl<C: CrossSessionCache, N: NavStateStore> ViewController<C, N> {
    /// Build a controller over fresh state and the given stores.
    pub fn new(cache: C, nav: N) -> Self {
        Self {
            state: AppState::default(),
            cache,
            nav,
            next_request_id: 0,
        }
    }

    /// Navigation store, for shutdown flushing and tests.
    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// Cross-session cache, for tests.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Save the current listing snapshot when the listing view is active.
    ///
    /// Runs on every records/filter mutation, never on user request.
    fn autosave(&mut self) {
        if self.state.active_view == ActiveView::Listing {
            let snapshot = self.state.session_snapshot();
            self.nav.save(&snapshot);
        }
    }

    /// Replace the free-text query.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.state.query_input = text.into();
        self.autosave();
    }

    /// Append one typed character to the query.
    pub fn type_char(&mut self, c: char) {
        self.state.query_input.push(c);
        self.autosave();
    }

    /// Delete the last query character.
    pub fn backspace(&mut self) {
        self.state.query_input.pop();
        self.autosave();
    }

    /// Replace the specialization filter.
    pub fn set_specialization(&mut self, value: impl Into<String>) {
        self.state.specialization = value.into();
        self.autosave();
    }

    /// Step the specialization selector and persist the change.
    pub fn cycle_specialization(&mut self, forward: bool) {
        self.state.cycle_specialization(forward);
        self.autosave();
    }

    /// Issue a retrieval for the current filters, marking the view loading.
    ///
    /// The returned request goes to the search worker; at most one mount-time
    /// request is ever produced, and user searches are correlated by id.
    pub fn begin_search(&mut self, kind: RequestKind) -> SearchRequest {
        self.next_request_id += 1;
        self.state.loading = true;
        let filters = match kind {
            RequestKind::Search => self.state.filters(),
            RequestKind::InitialLoad => SearchFilters::default(),
        };
        tracing::info!(
            id = self.next_request_id,
            query = %filters.query_text,
            specialization = %filters.specialization,
            kind = ?kind,
            "[View] retrieval issued"
        );
        SearchRequest {
            id: self.next_request_id,
            filters,
            kind,
        }
    }

    /// Apply a completed retrieval.
    ///
    /// The cross-session cache always receives the unfiltered payload (it is
    /// view-independent bootstrap data), but the listing and the navigation
    /// store are only touched when the listing is still the active view;
    /// completions arriving after navigation away are discarded. Completion
    /// order decides which result sticks.
    pub fn apply_search(&mut self, response: SearchResponse) {
        if let Some(full_set) = response.outcome.full_set {
            self.cache.store(&full_set);
        }
        self.state.loading = false;
        if self.state.active_view != ActiveView::Listing {
            tracing::debug!(
                id = response.id,
                "[View] retrieval completed after navigation away; discarding"
            );
            return;
        }
        let snapshot = response.outcome.snapshot;
        self.state.snapshot_filters = snapshot.filters;
        self.state.records = snapshot.records;
        self.state.scroll_to_top();
        self.autosave();
    }

    /// Leave the listing for the detail view of `id`, persisting the
    /// snapshot (including the live scroll offset) first.
    pub fn view_detail(&mut self, id: u64) {
        self.autosave();
        self.state.detail = self
            .state
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned();
        self.state.active_view = ActiveView::Detail(id);
        tracing::info!(id, "[View] opening provider detail");
    }

    /// Apply a detail fetch result; a failed fetch keeps the listing copy.
    pub fn apply_detail(&mut self, response: DetailResponse) {
        if self.state.active_view != ActiveView::Detail(response.id) {
            return;
        }
        if let Some(record) = response.record {
            self.state.detail = Some(record);
        }
    }

    /// Mount the listing view, resolving which source populates it.
    ///
    /// Returns the single retrieval to issue, when the resolution calls for
    /// one.
    pub fn on_mounted(&mut self, explicit: &SearchFilters) -> Option<SearchRequest> {
        match resolver::resolve_mount(explicit, &self.nav, &self.cache) {
            Resolution::ExplicitSearch { filters } => {
                self.state.query_input = filters.query_text;
                self.state.specialization = filters.specialization;
                Some(self.begin_search(RequestKind::Search))
            }
            Resolution::Restored { snapshot } => {
                self.state.pending_scroll = Some(snapshot.scroll_offset);
                self.state.adopt_snapshot(snapshot);
                None
            }
            Resolution::Bootstrapped { records } => {
                self.state.records = records;
                self.state.snapshot_filters = SearchFilters::default();
                self.state.clamp_selection();
                self.autosave();
                None
            }
            Resolution::ColdStart => Some(self.begin_search(RequestKind::InitialLoad)),
        }
    }

    /// Return to the listing via back navigation, restoring whatever
    /// snapshot is current in the navigation store.
    pub fn on_history_navigated(&mut self) {
        self.state.active_view = ActiveView::Listing;
        self.state.detail = None;
        if let Some(snapshot) = resolver::resolve_history(&self.nav) {
            self.state.pending_scroll = Some(snapshot.scroll_offset);
            if snapshot.is_empty() {
                // Filters still restore; an empty record set is not adopted.
                self.state.query_input = snapshot.filters.query_text;
                self.state.specialization = snapshot.filters.specialization;
            } else {
                self.state.adopt_snapshot(snapshot);
            }
        }
    }

    /// Final save before the process (and with it the session store) goes
    /// away.
    pub fn on_about_to_unmount(&mut self) {
        self.autosave();
    }
}
