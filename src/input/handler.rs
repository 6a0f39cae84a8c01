use crate::app::{AppState, TaskError};
use crate::domain::{Filter, UiMode};
use crate::persistence::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Handle a key press. Returns true when the app should quit.
///
/// Operation errors never escape: they are logged and shown in the status line.
pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    // Ctrl+C quits from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // A status message lasts until the next key press
    app.status = None;

    let result = match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_adding_mode(app, key),
        UiMode::EditingTask => handle_editing_mode(app, key),
    };

    match result {
        Ok(should_quit) => should_quit,
        Err(e) => {
            warn!(error = %e, "operation failed");
            app.set_status(format!("Error: {}", e));
            false
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KeyValueStore>(
    app: &mut AppState<S>,
    key: KeyEvent,
) -> Result<bool, TaskError> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected()?,

        // Add / edit / delete
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.edit_selected()?,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected()?,

        // Filters
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Completed),
        KeyCode::Char('3') => app.set_filter(Filter::Pending),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Tab => {
            let next = app.filter().next();
            app.set_filter(next);
        }

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => {
            let dark = app.toggle_theme()?;
            app.set_status(if dark { "Dark mode" } else { "Light mode" });
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing a new task
fn handle_adding_mode<S: KeyValueStore>(
    app: &mut AppState<S>,
    key: KeyEvent,
) -> Result<bool, TaskError> {
    match key.code {
        KeyCode::Enter => {
            if app.submit_input()?.is_none() {
                app.set_status("Type a task first");
            }
        }
        KeyCode::Esc => app.cancel_add_task(),
        KeyCode::Tab => app.cycle_priority(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while editing an existing task
fn handle_editing_mode<S: KeyValueStore>(
    app: &mut AppState<S>,
    key: KeyEvent,
) -> Result<bool, TaskError> {
    match key.code {
        KeyCode::Enter => {
            if app.save_edit()? {
                app.set_status("Saved");
            } else {
                app.set_status("Task text cannot be empty");
            }
        }
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) => app.edit_add_char(c),
        _ => {}
    }
    Ok(false)
}
