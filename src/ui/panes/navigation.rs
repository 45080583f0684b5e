//! Navigation pane: the grouped list of bonding types.
//!
//! Rows are built by a pure helper so the active-row invariant (exactly
//! one row marked active, matching the selection) is testable without a
//! terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::catalog::{BondCatalog, BondCategory, BondKind};
use crate::ui::theme::DEFAULT_THEME;

/// One visual row of the navigation pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRow {
    Heading(BondCategory),
    Entry {
        kind: BondKind,
        title: &'static str,
        shortcut: char,
        active: bool,
    },
}

/// Build the rows: one heading per category followed by its entries in
/// catalog order, with the current selection marked active.
pub fn nav_rows(catalog: &BondCatalog, selected: BondKind) -> Vec<NavRow> {
    let mut rows = Vec::new();
    for category in BondCategory::ALL {
        rows.push(NavRow::Heading(category));
        for entry in catalog.by_category(category) {
            rows.push(NavRow::Entry {
                kind: entry.kind,
                title: entry.title,
                shortcut: char::from(b'1' + entry.kind.index() as u8),
                active: entry.kind == selected,
            });
        }
    }
    rows
}

/// Render the navigation pane.
pub fn render_navigation_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &BondCatalog,
    selected: BondKind,
) {
    let block = Block::default()
        .title(" Bindungsarten ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut items: Vec<ListItem> = Vec::new();
    for row in nav_rows(catalog, selected) {
        match row {
            NavRow::Heading(category) => {
                if !items.is_empty() {
                    items.push(ListItem::new(""));
                }
                items.push(ListItem::new(Line::from(Span::styled(
                    category.heading(),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ))));
            }
            NavRow::Entry {
                title,
                shortcut,
                active,
                ..
            } => {
                let style = if active {
                    Style::default()
                        .bg(DEFAULT_THEME.primary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", shortcut),
                        Style::default().fg(DEFAULT_THEME.muted),
                    ),
                    Span::styled(format!(" {} ", title), style),
                ])));
            }
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
