//! Two argon atoms with temporary induced dipoles.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::VanDerWaalsModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &VanDerWaalsModel, anim_frame: usize) -> Canvas {
    let mut canvas = Canvas::new(30, 5);
    let revealed = model.reveal.is_revealed();

    // Two nonpolar atoms; badge_width("Ar") = 4
    canvas.badge(6, 2, "Ar", DEFAULT_THEME.noble);
    canvas.badge(20, 2, "Ar", DEFAULT_THEME.noble);

    if revealed {
        // Induced poles flicker on the atom edges
        let ping = anim_frame % 2 == 0;
        let pole = |color| {
            let style = Style::default().fg(color);
            if ping {
                style.add_modifier(Modifier::BOLD)
            } else {
                style.add_modifier(Modifier::DIM)
            }
        };
        let plus = pole(DEFAULT_THEME.delta_plus);
        let minus = pole(DEFAULT_THEME.delta_minus);
        canvas.put(5, 2, '•', minus);
        canvas.put(10, 2, '•', plus);
        canvas.put(19, 2, '•', plus);
        canvas.put(24, 2, '•', minus);

        // Three faint attraction lines between the temporary dipoles
        let line_style = Style::default()
            .fg(DEFAULT_THEME.muted)
            .add_modifier(Modifier::DIM);
        for y in 1..=3 {
            canvas.hdashes(11, y, 8, line_style);
        }
    }

    canvas
}
