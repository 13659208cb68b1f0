use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,

    // Bar highlight categories
    pub bar: Color,
    pub comparing: Color,
    pub swapping: Color,
    pub sorted: Color,
    pub pivot: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),       // Blue for keywords
    number: Color::Rgb(250, 179, 135),        // Orange for numbers
    border_normal: Color::Rgb(108, 112, 134), // Grey borders
    current_line_bg: Color::Rgb(50, 50, 70),  // Slightly lighter BG for current line

    bar: Color::Rgb(180, 190, 254),       // Lavender for untouched bars
    comparing: Color::Rgb(137, 180, 250), // Blue: being compared
    swapping: Color::Rgb(243, 139, 168),  // Red: being exchanged
    sorted: Color::Rgb(166, 227, 161),    // Green: in final position
    pivot: Color::Rgb(249, 226, 175),     // Yellow: current pivot
};
