//! Cu⁺ lattice in its electron gas.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::MetallicModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &MetallicModel) -> Canvas {
    let mut canvas = Canvas::new(28, 7);

    // 4x3 lattice of metal ions
    for row in 0..3u16 {
        for col in 0..4u16 {
            canvas.badge(1 + col * 7, row * 3, "Cu⁺", DEFAULT_THEME.copper);
        }
    }

    // The electron gas drifts over the lattice; positions live in the
    // model as unit-square coordinates
    let electron_style = Style::default()
        .fg(DEFAULT_THEME.electron)
        .add_modifier(Modifier::BOLD);
    for electron in &model.electrons {
        let x = (electron.x * f32::from(canvas.width() - 1)).round() as u16;
        let y = (electron.y * f32::from(canvas.height() - 1)).round() as u16;
        canvas.put(x, y, '•', electron_style);
    }

    canvas
}
