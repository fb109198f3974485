use ratatui::style::{Color, Modifier, Style};

// Centralized colors for the desktop host.

pub fn desktop_bg() -> Color {
    Color::Black
}

// Panel / taskbar
pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::White
}
pub fn panel_inactive_fg() -> Color {
    Color::Gray
}
pub fn panel_active_bg() -> Color {
    Color::Gray
}
pub fn panel_active_fg() -> Color {
    Color::Black
}

// Decorator
pub fn decorator_header_bg() -> Color {
    Color::Blue
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_inactive_header_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_border() -> Color {
    Color::DarkGray
}
pub fn decorator_pinned_border() -> Color {
    Color::Yellow
}

pub fn header_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(decorator_header_bg())
            .fg(decorator_header_fg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(decorator_inactive_header_bg())
            .fg(decorator_header_fg())
    }
}

pub fn border_style(pinned: bool) -> Style {
    let fg = if pinned {
        decorator_pinned_border()
    } else {
        decorator_border()
    };
    Style::default().fg(fg).bg(desktop_bg())
}

pub fn body_style() -> Style {
    Style::default().fg(Color::Reset).bg(Color::Reset)
}

// Log tail highlight for warnings
pub fn warn_fg() -> Color {
    Color::Yellow
}
