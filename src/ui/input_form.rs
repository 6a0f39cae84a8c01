use crate::app::AppState;
use crate::domain::{Priority, UiMode};
use crate::persistence::KeyValueStore;
use crate::ui::styles::{border_style, default_style, hint_style, priority_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-task input bar with its priority selector
pub fn render_input_form<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let theme = app.theme();
    let active = app.ui_mode == UiMode::AddingTask;

    let mut spans = vec![Span::raw("> ")];
    if active || !app.input().is_empty() {
        spans.push(Span::styled(app.input().to_string(), default_style(theme)));
    } else {
        spans.push(Span::styled("Add a new task", hint_style(theme)));
    }
    if active {
        spans.push(Span::styled("█", title_style(theme))); // Cursor
    }

    // Priority selector: the current choice is bracketed
    spans.push(Span::raw("   "));
    for priority in Priority::all() {
        let label = if *priority == app.priority() {
            format!("[{}]", priority)
        } else {
            format!(" {} ", priority)
        };
        let style = if *priority == app.priority() {
            priority_style(theme, *priority)
        } else {
            hint_style(theme)
        };
        spans.push(Span::styled(label, style));
    }

    let title = if active {
        " New task (Tab priority · Enter add · Esc cancel) "
    } else {
        " New task (a) "
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .style(default_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if active {
                    title_style(theme)
                } else {
                    border_style(theme)
                })
                .title(Span::styled(title, title_style(theme))),
        );

    f.render_widget(paragraph, area);
}
