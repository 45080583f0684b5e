//! Detail pane: title, category badge, description and example of the
//! current selection. Pure projection of a catalog entry.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::BondEntry;
use crate::ui::theme::DEFAULT_THEME;

/// Render the detail pane for the selected entry.
pub fn render_detail_pane(frame: &mut Frame, area: Rect, entry: &BondEntry) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let badge = Span::styled(
        format!(" {} ", entry.category.badge()),
        Style::default()
            .bg(DEFAULT_THEME.surface)
            .fg(DEFAULT_THEME.primary),
    );

    let lines = vec![
        Line::from(Span::styled(
            entry.title,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(badge),
        Line::from(""),
        Line::from(Span::styled(
            entry.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Beispiel: ",
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.example, Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
