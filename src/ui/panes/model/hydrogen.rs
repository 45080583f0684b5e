//! Two water molecules joined by a hydrogen bridge.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::HydrogenModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &HydrogenModel, anim_frame: usize) -> Canvas {
    let mut canvas = Canvas::new(32, 9);
    let revealed = model.reveal.is_revealed();

    // Upper-left water molecule
    canvas.badge(7, 0, "O", DEFAULT_THEME.oxygen);
    canvas.badge(3, 2, "H", DEFAULT_THEME.hydrogen);
    canvas.badge(11, 2, "H", DEFAULT_THEME.hydrogen);

    // Lower-right water molecule
    canvas.badge(22, 8, "O", DEFAULT_THEME.oxygen);
    canvas.badge(18, 6, "H", DEFAULT_THEME.hydrogen);
    canvas.badge(26, 6, "H", DEFAULT_THEME.hydrogen);

    if revealed {
        // Dashed bridge from the upper H toward the lower O
        let bridge_style = if anim_frame % 2 == 0 {
            Style::default()
                .fg(DEFAULT_THEME.delta_minus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.delta_minus)
        };
        canvas.put(14, 3, '╲', bridge_style);
        canvas.put(16, 4, '╲', bridge_style);
        canvas.put(18, 5, '╲', bridge_style);

        let label_style = Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD);
        canvas.put_str(17, 3, "H-Brücke", label_style);
    }

    canvas
}
