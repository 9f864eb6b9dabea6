use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Title field
        lines.push(Line::raw(""));
        let title_label = if form.editing_field == 0 {
            "What are you working on? (editing)"
        } else {
            "What are you working on?"
        };
        lines.push(Line::raw(title_label));

        let title_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.title, modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(title_line);
        lines.push(Line::raw(""));

        // Estimate field
        let estimate_label = if form.editing_field == 1 {
            "Est Pomodoros: (editing)"
        } else {
            "Est Pomodoros:"
        };
        lines.push(Line::raw(estimate_label));

        let estimate_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.estimate, modal_title_style()),
            if form.editing_field == 1 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(estimate_line);
        lines.push(Line::raw(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(error.as_str(), error_style())));
            lines.push(Line::raw(""));
        }

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
