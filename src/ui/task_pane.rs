use crate::app::AppState;
use crate::ui::styles::{accent_style, border_style, default_style, hint_style, selected_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rgb = app.theme_rgb();

    let items: Vec<ListItem> = if app.tasks.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            " No tasks yet. Press a to add one.",
            hint_style(),
        )))]
    } else {
        app.tasks
            .rows()
            .into_iter()
            .map(|row| {
                let style = if row.is_active {
                    selected_style()
                } else {
                    default_style()
                };
                let marker = if row.is_active { "▶" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} {:>2}. ", marker, row.position), style),
                    Span::styled(row.title.to_string(), style),
                    Span::styled(format!("  ({})", row.estimated_units), style),
                ]))
            })
            .collect()
    };

    let title = format!(
        " Tasks · {} pomodoros estimated ",
        app.tasks.total_estimated_units()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(rgb))
            .title(Span::styled(title, accent_style(rgb))),
    );

    f.render_widget(list, area);
}
