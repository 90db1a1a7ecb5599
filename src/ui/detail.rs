//! Provider detail screen.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// Render the detail view for the currently opened provider.
pub fn render_detail(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let [body_area, foot_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());

    let block = Block::default()
        .title(Span::styled(
            " Provider Details ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay));

    let lines: Vec<Line> = app.detail.as_ref().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Loading provider…",
                Style::default().fg(th.yellow),
            ))]
        },
        |record| {
            vec![
                Line::from(Span::styled(
                    record.name.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled("Specialization: ", Style::default().fg(th.subtext)),
                    Span::styled(
                        record.specialization.clone(),
                        Style::default().fg(th.sapphire),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Clinic:         ", Style::default().fg(th.subtext)),
                    Span::styled(record.clinic_name.clone(), Style::default().fg(th.text)),
                ]),
                Line::from(vec![
                    Span::styled("Location:       ", Style::default().fg(th.subtext)),
                    Span::styled(
                        format!("{}, {}", record.city, record.country),
                        Style::default().fg(th.text),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Rating:         ", Style::default().fg(th.subtext)),
                    Span::styled(record.rating_label(), Style::default().fg(th.green)),
                ]),
            ]
        },
    );

    f.render_widget(Paragraph::new(lines).block(block), body_area);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Esc back to listing   Ctrl+C quit",
            Style::default().fg(th.overlay),
        )),
        foot_area,
    );
}
