use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,   // Grey, captions and inactive rows
    pub primary: Color, // Blue, active nav row and toggle button
    pub secondary: Color, // Orange, status highlights
    pub border_focused: Color,
    pub border_normal: Color,
    pub surface: Color, // Status bar / badge background
    // Atom badge colors
    pub oxygen: Color,
    pub hydrogen: Color,
    pub chlorine: Color,
    pub sodium: Color,
    pub copper: Color,
    pub noble: Color, // Argon and other noble gases
    // Decoration colors
    pub electron: Color,
    pub delta_plus: Color,
    pub delta_minus: Color,
    pub attraction: Color, // Dashed attraction lines
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    surface: Color::Rgb(50, 50, 70),
    oxygen: Color::Rgb(243, 139, 168),   // Red
    hydrogen: Color::Rgb(137, 180, 250), // Light blue
    chlorine: Color::Rgb(166, 227, 161), // Green
    sodium: Color::Rgb(203, 166, 247),   // Purple
    copper: Color::Rgb(147, 153, 178),   // Grey
    noble: Color::Rgb(166, 173, 200),    // Light grey
    electron: Color::Rgb(249, 226, 175), // Yellow
    delta_plus: Color::Rgb(243, 139, 168),  // Red, partial positive
    delta_minus: Color::Rgb(137, 180, 250), // Blue, partial negative
    attraction: Color::Rgb(235, 160, 172),  // Soft red
};
