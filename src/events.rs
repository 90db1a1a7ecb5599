//! Keyboard handling for the docsea TUI.
//!
//! Translates raw `crossterm` events into controller mutations and channel
//! sends. The listing owns most bindings:
//!
//! - typing edits the query text, `Backspace` deletes
//! - `Tab`/`BackTab` cycle the specialization selector
//! - `Enter` runs a search with the current filters
//! - `Up`/`Down`/`PageUp`/`PageDown` move the highlight
//! - `Right` opens the detail view for the highlighted provider
//! - `Esc`/`Ctrl+C` exit
//!
//! On the detail view `Esc`/`Left` navigate back to the listing (restoring
//! its snapshot); `Ctrl+C` exits.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::cache::CrossSessionCache;
use crate::controller::ViewController;
use crate::session::NavStateStore;
use crate::state::{ActiveView, RequestKind, SearchRequest};

/// Dispatch a single input event.
///
/// Returns `true` when the application should exit.
pub fn handle_event<C: CrossSessionCache, N: NavStateStore>(
    ev: &CEvent,
    ctl: &mut ViewController<C, N>,
    query_tx: &mpsc::UnboundedSender<SearchRequest>,
    detail_tx: &mpsc::UnboundedSender<u64>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match ctl.state.active_view {
        ActiveView::Detail(_) => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Left) {
                ctl.on_history_navigated();
            }
            false
        }
        ActiveView::Listing => match ke.code {
            KeyCode::Esc => true,
            KeyCode::Enter => {
                let req = ctl.begin_search(RequestKind::Search);
                let _ = query_tx.send(req);
                false
            }
            KeyCode::Tab => {
                ctl.cycle_specialization(true);
                false
            }
            KeyCode::BackTab => {
                ctl.cycle_specialization(false);
                false
            }
            KeyCode::Up => {
                ctl.state.move_selection(-1);
                false
            }
            KeyCode::Down => {
                ctl.state.move_selection(1);
                false
            }
            KeyCode::PageUp => {
                ctl.state.move_selection(-10);
                false
            }
            KeyCode::PageDown => {
                ctl.state.move_selection(10);
                false
            }
            KeyCode::Right => {
                if let Some(id) = ctl.state.selected_record().map(|r| r.id) {
                    ctl.view_detail(id);
                    let _ = detail_tx.send(id);
                }
                false
            }
            KeyCode::Backspace => {
                ctl.backspace();
                false
            }
            KeyCode::Char(ch) => {
                ctl.type_char(ch);
                false
            }
            _ => false,
        },
    }
}
