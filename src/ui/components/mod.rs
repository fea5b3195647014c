//! Reusable UI components

mod dialog;

pub use dialog::render_notice_dialog;
