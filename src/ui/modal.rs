use crate::app::AppState;
use crate::persistence::KeyValueStore;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the edit dialog over the task list
pub fn render_edit_modal<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if let Some(edit) = app.edit() {
        let theme = app.theme();
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw(" > "),
                Span::styled(edit.buffer.clone(), modal_title_style(theme)),
                Span::styled("█", modal_title_style(theme)), // Cursor
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" [Enter]", modal_title_style(theme)),
                Span::raw(" Save  "),
                Span::styled("[Esc]", modal_title_style(theme)),
                Span::raw(" Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Edit Task ", modal_title_style(theme)))
                    .style(modal_bg_style(theme)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
