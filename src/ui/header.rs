use crate::app::AppState;
use crate::domain::Filter;
use crate::persistence::KeyValueStore;
use crate::ui::styles::{border_style, default_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the header: filter tabs on the left, counts and theme in the title
pub fn render_header<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let theme = app.theme();
    let counts = app.counts();

    let titles: Vec<Line> = Filter::all()
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::raw(format!("{} {}", i + 1, filter.label())))
        .collect();
    let selected = Filter::all()
        .iter()
        .position(|candidate| *candidate == app.filter())
        .unwrap_or(0);

    let title = format!(
        " To-Do List · {} tasks, {} open, {} done · {} mode ",
        counts.total,
        counts.pending,
        counts.completed,
        theme.name()
    );

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(default_style(theme))
        .highlight_style(selected_style(theme))
        .divider(Span::raw("|"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(theme))
                .title(Span::styled(title, title_style(theme))),
        );

    f.render_widget(tabs, area);
}
