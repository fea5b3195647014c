//! Registration form rendering

use super::field_renderer::{draw_error, draw_field, ERROR_HEIGHT, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw every registered field with its visible error
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .flat_map(|_| {
            [
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(ERROR_HEIGHT),
            ]
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let state = &app.state;
    for field in FieldId::ALL {
        let row = field.index() * 2;
        let error = state.form.visible_error(field);
        draw_field(
            frame,
            chunks[row],
            field.label(),
            &state.display_value(field),
            state.focused == field,
            error,
        );
        draw_error(frame, chunks[row + 1], error);
    }
}
