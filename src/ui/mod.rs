//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::render_notice_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    forms::draw_registration(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Overlay the success notice last so it sits on top
    if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, &notice.message);
    }
}
