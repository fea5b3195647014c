//! Submission accepted dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the acknowledgement for an accepted registration
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Success",
            accent: Color::Green,
            message,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
