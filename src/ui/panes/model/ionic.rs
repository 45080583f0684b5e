//! Na⁺ and Cl⁻ ions attracting each other.

use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use crate::model::IonicModel;
use crate::ui::theme::DEFAULT_THEME;

pub(super) fn scene(model: &IonicModel, anim_frame: usize) -> Canvas {
    let mut canvas = Canvas::new(36, 7);
    let revealed = model.reveal.is_revealed();

    // The ions sit far apart until the attraction is shown
    let gap: u16 = if revealed { 6 } else { 16 };
    let badge_w = Canvas::badge_width("Na⁺");
    let left = (canvas.width() - (badge_w * 2 + gap)) / 2;

    canvas.badge(left, 3, "Na⁺", DEFAULT_THEME.sodium);
    canvas.badge(left + badge_w + gap, 3, "Cl⁻", DEFAULT_THEME.chlorine);

    if revealed {
        // Five pulsing attraction lines stacked across the gap
        let line_style = if anim_frame % 2 == 0 {
            Style::default()
                .fg(DEFAULT_THEME.attraction)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(DEFAULT_THEME.attraction)
                .add_modifier(Modifier::DIM)
        };
        for y in 1..=5 {
            canvas.hdashes(left + badge_w, y, gap, line_style);
        }
    }

    canvas
}
