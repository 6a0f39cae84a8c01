use crate::domain::{Theme, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Key hints for the current mode
pub fn hints(mode: UiMode) -> &'static [&'static str] {
    match mode {
        UiMode::Normal => &[
            "↑/↓ select",
            "a add",
            "Space done",
            "e edit",
            "d delete",
            "1/2/3 filter",
            "t theme",
            "q quit",
        ],
        UiMode::AddingTask => &["Enter add", "Tab priority", "Esc cancel"],
        UiMode::EditingTask => &["Enter save", "Esc cancel"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, theme: Theme, area: Rect) {
    let spans: Vec<Span> = hints(mode)
        .iter()
        .map(|hint| Span::raw(format!(" {}  ", hint)))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style(theme));
    f.render_widget(paragraph, area);
}
