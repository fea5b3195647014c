//! Validation rules for the registration form.
//!
//! Every rule is a pure function of the field value, the full set of form
//! values (for cross-field checks) and the current calendar year. Failures are
//! returned as [`FieldError`] values, never as `Err`.

mod clock;
mod error;
mod rules;

pub use error::FieldError;
pub use rules::RuleSet;

#[cfg(test)]
pub use clock::MockClock;
