//! Central mutable state for the docsea TUI.

use ratatui::widgets::ListState;

use super::types::{ActiveView, ListingSnapshot, ProviderRecord, SPECIALIZATIONS, SearchFilters};

/// Mutable application state shared by the event, controller, and UI layers.
///
/// The listing's record set together with the displayed filters and scroll
/// position form the snapshot persisted into the navigation-scoped store;
/// everything else is transient presentation state.
#[derive(Debug)]
pub struct AppState {
    /// Free-text query as currently typed.
    pub query_input: String,
    /// Currently selected specialization value; empty means all.
    pub specialization: String,
    /// Records currently shown in the listing.
    pub records: Vec<ProviderRecord>,
    /// Filters that produced `records` (may lag the displayed filters while
    /// a search is in flight).
    pub snapshot_filters: SearchFilters,
    /// Index of the highlighted listing row.
    pub selected: usize,
    /// ratatui list selection/offset state for the listing pane.
    pub list_state: ListState,
    /// Scroll offset to apply on the next render, if a restore is scheduled.
    pub pending_scroll: Option<usize>,
    /// Whether a retrieval is currently in flight.
    pub loading: bool,
    /// Which screen owns the terminal.
    pub active_view: ActiveView,
    /// Record shown by the detail screen, when on it.
    pub detail: Option<ProviderRecord>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query_input: String::new(),
            specialization: String::new(),
            records: Vec::new(),
            snapshot_filters: SearchFilters::default(),
            selected: 0,
            list_state: ListState::default(),
            pending_scroll: None,
            loading: false,
            active_view: ActiveView::Listing,
            detail: None,
        }
    }
}

impl AppState {
    /// The filters as currently displayed (not necessarily applied yet).
    #[must_use]
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            query_text: self.query_input.clone(),
            specialization: self.specialization.clone(),
        }
    }

    /// Snapshot of the current listing suitable for the navigation store:
    /// displayed records and filters plus the live viewport offset.
    #[must_use]
    pub fn session_snapshot(&self) -> ListingSnapshot {
        ListingSnapshot {
            records: self.records.clone(),
            filters: self.filters(),
            scroll_offset: self.list_state.offset(),
        }
    }

    /// Replace the listing contents from a snapshot, adopting its filters.
    pub fn adopt_snapshot(&mut self, snapshot: ListingSnapshot) {
        self.query_input = snapshot.filters.query_text.clone();
        self.specialization = snapshot.filters.specialization.clone();
        self.snapshot_filters = snapshot.filters;
        self.records = snapshot.records;
        self.clamp_selection();
    }

    /// Record currently highlighted in the listing, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ProviderRecord> {
        self.records.get(self.selected)
    }

    /// Move the highlight by `delta` rows, clamped to the record range.
    pub fn move_selection(&mut self, delta: isize) {
        if self.records.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let max = self.records.len() - 1;
        let cur = isize::try_from(self.selected).unwrap_or(0);
        let next = cur.saturating_add(delta).clamp(0, isize::try_from(max).unwrap_or(0));
        self.selected = usize::try_from(next).unwrap_or(0);
        self.list_state.select(Some(self.selected));
    }

    /// Step the specialization selector forward or backward through the
    /// fixed vocabulary, wrapping at both ends.
    pub fn cycle_specialization(&mut self, forward: bool) {
        let len = SPECIALIZATIONS.len();
        let cur = SPECIALIZATIONS
            .iter()
            .position(|s| *s == self.specialization)
            .unwrap_or(0);
        let next = if forward {
            (cur + 1) % len
        } else {
            (cur + len - 1) % len
        };
        self.specialization = SPECIALIZATIONS[next].to_string();
    }

    /// Keep the highlight inside the record range after a set change.
    pub fn clamp_selection(&mut self) {
        if self.records.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.records.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Reset the listing scroll and highlight to the top.
    pub fn scroll_to_top(&mut self) {
        self.selected = 0;
        let mut st = ListState::default().with_offset(0);
        if !self.records.is_empty() {
            st.select(Some(0));
        }
        self.list_state = st;
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::state::types::{ProviderRecord, SPECIALIZATIONS};

    fn record(id: u64) -> ProviderRecord {
        ProviderRecord {
            id,
            name: format!("Dr. {id}"),
            specialization: String::new(),
            clinic_name: String::new(),
            city: String::new(),
            country: String::new(),
            rating: None,
        }
    }

    #[test]
    /// What: Specialization selector wraps in both directions
    ///
    /// - Input: Default state cycled forward once and backward twice
    /// - Output: First named entry, then wrap to the last entry
    fn cycle_specialization_wraps() {
        let mut app = AppState::default();
        app.cycle_specialization(true);
        assert_eq!(app.specialization, SPECIALIZATIONS[1]);
        app.cycle_specialization(false);
        app.cycle_specialization(false);
        assert_eq!(
            app.specialization,
            SPECIALIZATIONS[SPECIALIZATIONS.len() - 1]
        );
    }

    #[test]
    /// What: Selection movement clamps to the record range
    ///
    /// - Input: Three records; moves past both ends
    /// - Output: Highlight stays within 0..=2 and tracks the list state
    fn move_selection_clamps() {
        let mut app = AppState {
            records: vec![record(1), record(2), record(3)],
            ..Default::default()
        };
        app.move_selection(10);
        assert_eq!(app.selected, 2);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Session snapshot mirrors displayed records and filters
    ///
    /// - Input: State with records and typed filters
    /// - Output: Snapshot carrying the same records and filter values
    fn session_snapshot_reflects_state() {
        let mut app = AppState {
            records: vec![record(5)],
            ..Default::default()
        };
        app.query_input = "chen".to_string();
        app.specialization = "Cardiologist".to_string();
        let snap = app.session_snapshot();
        assert_eq!(snap.records.len(), 1);
        assert_eq!(snap.filters.query_text, "chen");
        assert_eq!(snap.filters.specialization, "Cardiologist");
    }

    #[test]
    /// What: Adopting a snapshot replaces records and filters wholesale
    ///
    /// - Input: Snapshot with two records and its own filters
    /// - Output: State shows the snapshot contents; selection clamped
    fn adopt_snapshot_replaces_listing() {
        let mut app = AppState {
            selected: 9,
            ..Default::default()
        };
        let snap = crate::state::types::ListingSnapshot {
            records: vec![record(1), record(2)],
            filters: crate::state::types::SearchFilters {
                query_text: "riv".to_string(),
                specialization: "Dentist".to_string(),
            },
            scroll_offset: 4,
        };
        app.adopt_snapshot(snap);
        assert_eq!(app.records.len(), 2);
        assert_eq!(app.query_input, "riv");
        assert_eq!(app.specialization, "Dentist");
        assert_eq!(app.selected, 1);
    }
}
