//! Cell-grid scene builder shared by the six widget renderers.
//!
//! Widgets place atom badges and dashed lines on a small grid of styled
//! cells; the grid is then emitted as [`Line`]s and drawn through a
//! centered `Paragraph`. Coordinates are grid cells, origin top-left.
//! Out-of-bounds writes are clipped silently.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Clone)]
struct Cell {
    symbol: char,
    style: Style,
}

pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>, // row-major
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let blank = Cell {
            symbol: ' ',
            style: Style::default(),
        };
        Canvas {
            width,
            height,
            cells: vec![blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn put(&mut self, x: u16, y: u16, symbol: char, style: Style) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] =
                Cell { symbol, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (i, symbol) in text.chars().enumerate() {
            self.put(x + i as u16, y, symbol, style);
        }
    }

    /// An atom badge: the element label on a colored background, padded by
    /// one cell on each side.
    pub fn badge(&mut self, x: u16, y: u16, label: &str, color: Color) {
        let style = Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
        self.put(x, y, ' ', style);
        self.put_str(x + 1, y, label, style);
        self.put(x + 1 + label.chars().count() as u16, y, ' ', style);
    }

    /// Width of a badge drawn with [`Canvas::badge`] for the given label.
    pub fn badge_width(label: &str) -> u16 {
        label.chars().count() as u16 + 2
    }

    /// Horizontal dashed line.
    pub fn hdashes(&mut self, x: u16, y: u16, len: u16, style: Style) {
        for i in 0..len {
            self.put(x + i, y, '╌', style);
        }
    }

    /// Vertical dashed line.
    pub fn vdashes(&mut self, x: u16, y: u16, len: u16, style: Style) {
        for i in 0..len {
            self.put(x, y + i, '╎', style);
        }
    }

    /// Emit the grid as one line per row, merging runs of equal style.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width as usize;
        self.cells
            .chunks(width.max(1))
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = Style::default();
                for cell in row {
                    if cell.style != run_style && !run.is_empty() {
                        spans.push(Span::styled(run.clone(), run_style));
                        run.clear();
                    }
                    run_style = cell.style;
                    run.push(cell.symbol);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut canvas = Canvas::new(4, 1);
        canvas.put_str(2, 0, "abcd", Style::default());
        let lines = canvas.into_lines();
        assert_eq!(lines.len(), 1);
        let text: String = lines[0]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "  ab");
    }

    #[test]
    fn test_rows_keep_full_width() {
        let canvas = Canvas::new(6, 3);
        for line in canvas.into_lines() {
            let len: usize = line
                .spans
                .iter()
                .map(|s| s.content.chars().count())
                .sum();
            assert_eq!(len, 6);
        }
    }

    #[test]
    fn test_badge_width() {
        assert_eq!(Canvas::badge_width("O"), 3);
        assert_eq!(Canvas::badge_width("Cu⁺"), 5);
    }
}
