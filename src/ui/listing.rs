//! Provider listing screen: search bar, specialization selector, results.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, ProviderRecord, SearchFilters};
use crate::theme::theme;

/// "City, Country" label for a record.
#[must_use]
pub fn location_label(record: &ProviderRecord) -> String {
    format!("{}, {}", record.city, record.country)
}

/// Specialization selector label; empty selects all.
#[must_use]
pub fn specialization_label(value: &str) -> &str {
    if value.is_empty() { "All Specialties" } else { value }
}

/// Results pane title describing the filters that produced the records,
/// which may lag the filters being typed.
#[must_use]
pub fn results_title(filters: &SearchFilters) -> String {
    let query = filters.query_text.trim();
    match (query.is_empty(), filters.specialization.is_empty()) {
        (true, true) => " Providers ".to_string(),
        (false, true) => format!(" Providers — \"{query}\" "),
        (true, false) => format!(" Providers — {} ", filters.specialization),
        (false, false) => format!(" Providers — \"{query}\" in {} ", filters.specialization),
    }
}

/// One listing row for a provider.
fn row_line(record: &ProviderRecord) -> Line<'static> {
    let th = theme();
    Line::from(vec![
        Span::styled(record.name.clone(), Style::default().fg(th.text)),
        Span::raw("  "),
        Span::styled(
            record.specialization.clone(),
            Style::default().fg(th.sapphire),
        ),
        Span::styled(
            format!("  {} — {}", record.clinic_name, location_label(record)),
            Style::default().fg(th.subtext),
        ),
        Span::styled(
            format!("  {}", record.rating_label()),
            Style::default().fg(th.green),
        ),
    ])
}

/// Render the listing view into the full frame.
pub fn render_listing(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let [bar_area, list_area, foot_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(th.subtext)),
        Span::styled(app.query_input.clone(), Style::default().fg(th.text)),
        Span::styled("▏", Style::default().fg(th.sapphire)),
        Span::styled("   Specialization: ", Style::default().fg(th.subtext)),
        Span::styled(
            specialization_label(&app.specialization).to_string(),
            Style::default().fg(th.mauve),
        ),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                " Find Providers ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay)),
    );
    f.render_widget(bar, bar_area);

    let list_block = Block::default()
        .title(Span::styled(
            results_title(&app.snapshot_filters),
            Style::default().fg(th.mauve),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay));
    if app.loading {
        let msg = Paragraph::new(Span::styled(
            "Loading providers…",
            Style::default().fg(th.yellow),
        ))
        .block(list_block);
        f.render_widget(msg, list_area);
    } else if app.records.is_empty() {
        let msg = Paragraph::new(Span::styled(
            "No providers found.",
            Style::default().fg(th.subtext),
        ))
        .block(list_block);
        f.render_widget(msg, list_area);
    } else {
        super::apply_pending_scroll(app);
        let items: Vec<ListItem> = app.records.iter().map(|r| ListItem::new(row_line(r))).collect();
        let list = List::new(items)
            .style(Style::default().fg(th.text).bg(th.base))
            .block(list_block)
            .highlight_style(Style::default().fg(th.text).bg(th.overlay))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, list_area, &mut app.list_state);
    }

    let footer = Paragraph::new(Span::styled(
        "Type to search   Tab specialization   Enter search   ↑/↓ select   → details   Esc quit",
        Style::default().fg(th.overlay),
    ));
    f.render_widget(footer, foot_area);
}
