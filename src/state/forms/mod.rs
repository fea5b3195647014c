//! Form domain layer
//!
//! The field registry, the typed value/error/touched maps, and the
//! registration form controller that owns them.

mod field;
mod form_data;
mod form_state;

pub use field::FieldId;
pub use form_data::{ErrorMap, FormValues, TouchedSet};
pub use form_state::{Registration, RegistrationForm, SubmitOutcome, SubmitTouchPolicy};
