pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_notice_modal, render_report_modal, render_settings_modal};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use styles::{accent_style, hint_style};
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.tasks_area);
    render_status_line(f, app, layout.status_area);

    match app.ui_mode {
        UiMode::AddingTask => render_input_form(f, app, size),
        UiMode::Settings => render_settings_modal(f, app, size),
        UiMode::Report => render_report_modal(f, app, size),
        UiMode::Normal => {}
    }

    // Notices sit on top of everything
    if app.notice.is_some() {
        render_notice_modal(f, app, size);
    }
}

/// Render the bottom status line
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.timer.mode().label()),
            accent_style(app.theme_rgb()),
        ),
        Span::styled(
            format!(
                "· {}/{}/{} min · theme {}",
                app.settings.focus_minutes,
                app.settings.short_break_minutes,
                app.settings.long_break_minutes,
                app.settings.theme_color
            ),
            hint_style(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
