use crate::app::AppState;
use crate::domain::{check_mark, Filter, Task, Theme};
use crate::persistence::KeyValueStore;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, priority_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Message shown when the current filter leaves nothing to display
fn empty_message(filter: Filter, total: usize) -> &'static str {
    if total == 0 {
        return "Nothing to do yet. Press 'a' to add a task.";
    }
    match filter {
        Filter::All => "Nothing to do yet. Press 'a' to add a task.",
        Filter::Completed => "No completed tasks.",
        Filter::Pending => "All done!",
    }
}

/// Render the task list pane (visible tasks only)
pub fn render_list_pane<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(
            format!(" Tasks ({}) ", app.filter().label()),
            title_style(theme),
        ));

    let items: Vec<ListItem> = app
        .visible_tasks()
        .map(|task| ListItem::new(create_task_line(task, theme)))
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(empty_message(app.filter(), app.tasks().len()))
            .style(hint_style(theme))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut state = ListState::default();
    state.select(Some(app.selected_row()));

    let list = List::new(items)
        .block(block)
        .style(default_style(theme))
        .highlight_style(selected_style(theme))
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task
/// Format: [x] Buy milk  (High)
fn create_task_line(task: &Task, theme: Theme) -> Line<'static> {
    let text_style = if task.completed {
        done_style(theme)
    } else {
        default_style(theme)
    };

    Line::from(vec![
        Span::styled(format!("{} ", check_mark(task.completed)), default_style(theme)),
        Span::styled(task.text.clone(), text_style),
        Span::raw("  "),
        Span::styled(
            format!("({})", task.priority),
            priority_style(theme, task.priority),
        ),
    ])
}
