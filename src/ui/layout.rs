//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and form content, reserving the status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header line with a touched-field counter
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let visible = form
        .touched()
        .iter()
        .filter(|field| form.visible_error(*field).is_some())
        .count();

    let mut spans = vec![Span::styled(
        " Create your account ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if form.values().is_pristine() && visible == 0 {
        spans.push(Span::styled(
            " fill in every field to register",
            Style::default().fg(Color::DarkGray),
        ));
    } else if visible > 0 {
        let noun = if visible == 1 { "field needs" } else { "fields need" };
        spans.push(Span::styled(
            format!(" {visible} {noun} attention"),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = if app.state.has_notice() {
        " Enter/Esc:dismiss".to_string()
    } else {
        format!(
            " Tab/↓:next  Shift+Tab/↑:prev  Enter/{}:submit  Esc:quit",
            SUBMIT_SHORTCUT
        )
    };

    let status = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);
}
