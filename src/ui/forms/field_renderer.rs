//! Field rendering utilities for forms

use crate::validation::FieldError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one input box
pub const FIELD_HEIGHT: u16 = 3;
/// Height of the error line under an input box
pub const ERROR_HEIGHT: u16 = 1;

/// Draw one input box; `error` is only passed when it should be shown
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block);

    frame.render_widget(content, area);
}

/// Draw the error line under a field
pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
