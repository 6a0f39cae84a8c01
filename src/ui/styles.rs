use crate::domain::{Priority, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Default text style (also paints the background)
pub fn default_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    let bg = match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::LightCyan,
    };
    let fg = match theme {
        Theme::Light => Color::White,
        Theme::Dark => Color::Black,
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    };
    default_style(theme).fg(fg).add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::DarkGray,
        Theme::Dark => Color::Gray,
    };
    default_style(theme).fg(fg)
}

/// Completed task text
pub fn done_style(theme: Theme) -> Style {
    default_style(theme)
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Keybinding hint style
pub fn hint_style(theme: Theme) -> Style {
    default_style(theme).fg(Color::DarkGray)
}

/// Status line style
pub fn status_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Magenta,
        Theme::Dark => Color::Yellow,
    };
    default_style(theme).fg(fg)
}

/// Error status style
pub fn error_style(theme: Theme) -> Style {
    default_style(theme).fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Priority badge colour
pub fn priority_style(theme: Theme, priority: Priority) -> Style {
    let fg = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    };
    let style = default_style(theme).fg(fg);
    if priority == Priority::High {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().bg(Color::Gray).fg(Color::Black),
        Theme::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

/// Modal title style
pub fn modal_title_style(theme: Theme) -> Style {
    modal_bg_style(theme).add_modifier(Modifier::BOLD)
}
