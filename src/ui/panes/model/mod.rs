//! The model pane: hosts whichever illustrative widget is mounted.
//!
//! Dispatch is an exhaustive match over [`BondModel`], one renderer per
//! widget. Each renderer builds a small cell-grid scene; this module
//! centers the scene and adds the toggle button and caption below it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

mod canvas;
mod covalent;
mod dipole;
mod hydrogen;
mod ionic;
mod metallic;
mod van_der_waals;

use crate::model::BondModel;
use crate::ui::theme::DEFAULT_THEME;
use self::canvas::Canvas;

/// Render the model pane for the mounted widget.
pub fn render_model_pane(
    frame: &mut Frame,
    area: Rect,
    model: &BondModel,
    anim_frame: usize,
) {
    let block = Block::default()
        .title(" Interaktives Modell ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Scene on top, toggle button and caption below
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let scene = match model {
        BondModel::Covalent(m) => covalent::scene(m, anim_frame),
        BondModel::Metallic(m) => metallic::scene(m),
        BondModel::Ionic(m) => ionic::scene(m, anim_frame),
        BondModel::VanDerWaals(m) => van_der_waals::scene(m, anim_frame),
        BondModel::Dipole(m) => dipole::scene(m, anim_frame),
        BondModel::Hydrogen(m) => hydrogen::scene(m, anim_frame),
    };
    render_scene(frame, rows[0], scene);

    // Only the label span carries the button background, not the full row
    let button_label = Span::styled(
        format!(" {} ", model.toggle_label()),
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    let button = Paragraph::new(Line::from(button_label))
        .alignment(Alignment::Center);
    frame.render_widget(button, rows[1]);

    let caption = Paragraph::new(model.caption())
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .alignment(Alignment::Center);
    frame.render_widget(caption, rows[2]);
}

/// Draw the scene grid vertically centered in the available space; rows
/// are fixed-width, so the centered alignment keeps columns intact.
fn render_scene(frame: &mut Frame, area: Rect, scene: Canvas) {
    let height = scene.height().min(area.height);
    let top = area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height,
    };
    let paragraph =
        Paragraph::new(scene.into_lines()).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
