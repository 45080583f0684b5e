//! Two antiparallel HCl molecules with permanent dipoles.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::DipoleModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &DipoleModel, anim_frame: usize) -> Canvas {
    let mut canvas = Canvas::new(30, 7);
    let revealed = model.reveal.is_revealed();

    // First molecule: H-Cl
    canvas.badge(8, 1, "H", DEFAULT_THEME.hydrogen);
    canvas.badge(11, 1, "Cl", DEFAULT_THEME.chlorine);

    // Second molecule, reversed: Cl-H
    canvas.badge(8, 5, "Cl", DEFAULT_THEME.chlorine);
    canvas.badge(12, 5, "H", DEFAULT_THEME.hydrogen);

    if revealed {
        let pulse = anim_frame % 2 == 0;
        let charge = |color| {
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if pulse {
                style
            } else {
                style.add_modifier(Modifier::DIM)
            }
        };
        let plus = charge(DEFAULT_THEME.delta_plus);
        let minus = charge(DEFAULT_THEME.delta_minus);

        // Partial charges at the molecule ends
        canvas.put_str(4, 1, "δ+", plus);
        canvas.put_str(16, 1, "δ−", minus);
        canvas.put_str(4, 5, "δ−", minus);
        canvas.put_str(16, 5, "δ+", plus);

        // Attraction between the opposing charges
        let line_style = Style::default().fg(DEFAULT_THEME.muted);
        for x in [10, 12, 14] {
            canvas.vdashes(x, 2, 3, line_style);
        }
    }

    canvas
}
