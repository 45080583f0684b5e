//! Water molecule with shared electron pairs.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::CovalentModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &CovalentModel, anim_frame: usize) -> Canvas {
    let mut canvas = Canvas::new(22, 5);
    let revealed = model.reveal.is_revealed();

    // While the bond is active the molecule vibrates by one cell
    let jitter = if revealed { (anim_frame % 2) as u16 } else { 0 };

    canvas.badge(2, 2, "O", DEFAULT_THEME.oxygen);
    canvas.badge(14 + jitter, 0, "H", DEFAULT_THEME.hydrogen);
    canvas.badge(14 + jitter, 4, "H", DEFAULT_THEME.hydrogen);

    // Shared electron pairs between O and the two H
    let pair_style = if revealed {
        Style::default()
            .fg(DEFAULT_THEME.electron)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.electron)
    };
    canvas.put_str(9 + jitter, 1, "●●", pair_style);
    canvas.put_str(9 + jitter, 3, "●●", pair_style);

    canvas
}
