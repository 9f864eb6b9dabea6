use crate::app::{AppState, SettingsFormState};
use crate::domain::{parse_hex_color, THEME_PALETTE};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style, theme_color},
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_boxed(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// One labelled minute field of the settings form
fn minute_field<'a>(label: &'a str, value: &'a str, editing: bool) -> Line<'a> {
    Line::from(vec![
        Span::raw(format!("  {:<18}", label)),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
        Span::raw(" min"),
    ])
}

/// Render the settings modal
pub fn render_settings_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.settings_form else {
        return;
    };

    let mut lines = vec![
        Line::raw(""),
        Line::raw("  Timer (minutes)"),
        minute_field("Pomodoro", &form.focus, form.editing_field == 0),
        minute_field("Short Break", &form.short_break, form.editing_field == 1),
        minute_field("Long Break", &form.long_break, form.editing_field == 2),
        Line::raw(""),
    ];

    let swatch_label = if form.editing_field == SettingsFormState::SWATCH_FIELD {
        "  Color Themes (←/→)  "
    } else {
        "  Color Themes        "
    };
    let mut swatches = vec![Span::raw(swatch_label)];
    for (idx, color) in THEME_PALETTE.iter().enumerate() {
        let fg = parse_hex_color(color).map(theme_color).unwrap_or(Color::Reset);
        let glyph = if idx == form.swatch_index { "[●]" } else { " ● " };
        swatches.push(Span::styled(glyph, Style::default().fg(fg)));
    }
    lines.push(Line::from(swatches));
    lines.push(Line::raw(""));

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(format!("  {}", error), error_style())));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  [Tab]", modal_title_style()),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", modal_title_style()),
        Span::raw(" OK  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Close"),
    ]));

    render_boxed(f, area, " Setting ", lines);
}

/// Render the report modal
pub fn render_report_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let summary = app.summary();

    let mut lines = vec![Line::raw("")];
    for (label, value) in summary.lines() {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<25}", label)),
            Span::styled(value, modal_title_style()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Close"),
    ]));

    render_boxed(f, area, " Report ", lines);
}

/// Render a one-off notice (countdown finished, sign-in stub)
pub fn render_notice_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", notice)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]),
    ];

    render_boxed(f, area, " Pomofocus ", lines);
}
