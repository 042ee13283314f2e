use ratatui::style::Color;

/// Fixed terminal palette shared by the ui modules. Sticks to the standard
/// ANSI colors so the user's terminal scheme carries through.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub black: Color,
    pub white: Color,
    pub yellow: Color,
    pub green: Color,
    pub red: Color,
    pub bright_blue: Color,
    pub bright_black: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            black: Color::Black,
            white: Color::White,
            yellow: Color::Yellow,
            green: Color::Green,
            red: Color::Red,
            bright_blue: Color::LightBlue,
            bright_black: Color::DarkGray,
        }
    }
}
