use crate::app::AppState;
use crate::domain::Mode;
use crate::ui::styles::{
    accent_style, active_tab_style, border_style, button_style, clock_style, default_style,
    hint_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Mode tabs with the current mode highlighted
fn mode_tabs(app: &AppState) -> Line<'static> {
    let rgb = app.theme_rgb();
    let mut spans = Vec::new();
    for (idx, mode) in Mode::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!(" {} {} ", idx + 1, mode.label());
        if *mode == app.timer.mode() {
            spans.push(Span::styled(label, active_tab_style(rgb)));
        } else {
            spans.push(Span::styled(label, default_style()));
        }
    }
    Line::from(spans)
}

/// Render the countdown pane: mode tabs, clock, start/stop button and caption
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rgb = app.theme_rgb();

    let lines = vec![
        Line::raw(""),
        mode_tabs(app),
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(app.clock(), clock_style())),
        Line::raw(""),
        Line::from(Span::styled(
            format!("   {}   ", app.start_stop_label()),
            button_style(rgb),
        )),
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(app.caption(), accent_style(rgb))),
        Line::from(Span::styled(
            format!("Finished focus sessions: {}", app.completed_focus_sessions),
            hint_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(rgb))
            .title(Span::styled(" Pomofocus ", accent_style(rgb))),
    );

    f.render_widget(paragraph, area);
}
