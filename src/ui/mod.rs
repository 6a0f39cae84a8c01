pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::persistence::KeyValueStore;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_edit_modal;
use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph},
    Frame,
};
use styles::{default_style, error_style, status_style};

/// Main render function - draws the entire UI from the current app state
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let theme = app.theme();

    // Paint the theme background first
    f.render_widget(Block::default().style(default_style(theme)), size);

    let layout = create_layout(size);
    render_keybindings(f, app.ui_mode, theme, layout.keybindings_area);
    render_header(f, app, layout.header_area);
    render_list_pane(f, app, layout.list_area);
    render_input_form(f, app, layout.input_area);
    render_status(f, app, layout.status_area);

    if app.is_editing() {
        render_edit_modal(f, app, size);
    }
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let theme = app.theme();
    let Some(msg) = app.status.as_deref() else {
        return;
    };
    let style = if msg.starts_with("Error") {
        error_style(theme)
    } else {
        status_style(theme)
    };
    f.render_widget(Paragraph::new(format!(" {}", msg)).style(style), area);
}
