//! Form rendering module
//!
//! - `field_renderer`: single input box plus its error line
//! - `registration_form`: the registration form layout

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
