//! Rendering for the docsea TUI: the provider listing and the detail screen.

pub mod detail;
pub mod listing;

use ratatui::Frame;

use crate::state::{ActiveView, AppState};

/// Render the active view.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    match app.active_view {
        ActiveView::Listing => listing::render_listing(f, app),
        ActiveView::Detail(_) => detail::render_detail(f, app),
    }
}

/// Apply a scheduled scroll-offset restoration.
///
/// Restores run on the render after they were scheduled, once the listing is
/// actually on screen again.
pub fn apply_pending_scroll(app: &mut AppState) {
    if let Some(offset) = app.pending_scroll.take() {
        // The highlight must sit inside the restored viewport, or the list
        // widget scrolls straight back to it.
        if app.selected < offset && offset < app.records.len() {
            app.selected = offset;
        }
        let mut st = ratatui::widgets::ListState::default().with_offset(offset);
        if app.records.is_empty() {
            st.select(None);
        } else {
            st.select(Some(app.selected.min(app.records.len() - 1)));
        }
        app.list_state = st;
    }
}
