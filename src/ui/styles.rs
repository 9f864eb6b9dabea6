use ratatui::style::{Color, Modifier, Style};

/// Theme color as a terminal color
pub fn theme_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Accent text in the theme color
pub fn accent_style(rgb: (u8, u8, u8)) -> Style {
    Style::default()
        .fg(theme_color(rgb))
        .add_modifier(Modifier::BOLD)
}

/// Highlighted tab / button: white on the theme color
pub fn active_tab_style(rgb: (u8, u8, u8)) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(theme_color(rgb))
        .add_modifier(Modifier::BOLD)
}

/// Big clock digits
pub fn clock_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Start/stop button: theme-colored text on white, like the page button
pub fn button_style(rgb: (u8, u8, u8)) -> Style {
    Style::default()
        .fg(theme_color(rgb))
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Active task row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Border style in the theme color
pub fn border_style(rgb: (u8, u8, u8)) -> Style {
    Style::default().fg(theme_color(rgb))
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
