use ratatui::style::Color;

pub struct ThemeColors {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub border: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

/// The single castview palette. A muted purple accent over a dark
/// background, readable on the common terminal schemes.
pub fn theme() -> ThemeColors {
    ThemeColors {
        primary: Color::Rgb(138, 99, 210),
        accent: Color::Rgb(186, 156, 245),
        text: Color::Rgb(220, 220, 220),
        text_dim: Color::Rgb(130, 130, 130),
        background: Color::Rgb(18, 16, 24),
        border: Color::Rgb(90, 70, 140),
        warning: Color::Rgb(230, 190, 80),
        error: Color::Rgb(235, 90, 90),
        highlight_bg: Color::Rgb(50, 40, 75),
    }
}
