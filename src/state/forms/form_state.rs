//! Registration form controller
//!
//! [`RegistrationForm`] owns the values, errors and touched flags and is the
//! only writer of them. The presentation layer reads snapshots through the
//! accessors and drives changes through the three event handlers.

use super::field::FieldId;
use super::form_data::{ErrorMap, FormValues, TouchedSet};
use crate::validation::{FieldError, RuleSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which fields a submit forces into the touched state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitTouchPolicy {
    /// Every declared field
    #[default]
    AllFields,
    /// Name, email, password, phone and confirm password only
    Legacy,
}

impl SubmitTouchPolicy {
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::AllFields => &FieldId::ALL,
            Self::Legacy => &FieldId::LEGACY_SUBMIT_TOUCHED,
        }
    }
}

/// Values of an accepted registration
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub country: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Registration {
    fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get(FieldId::Name).to_string(),
            email: values.get(FieldId::Email).to_string(),
            phone: values.get(FieldId::Phone).to_string(),
            dob: values.get(FieldId::Dob).to_string(),
            country: values.get(FieldId::Country).to_string(),
            password: values.get(FieldId::Password).to_string(),
        }
    }

    /// JSON rendering for logs; the password is never included
    pub fn summary(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("dob", &self.dob)
            .field("country", &self.country)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and has been reset
    Accepted(Registration),
    /// The form was invalid; state is kept for display
    Rejected { errors: usize },
}

impl SubmitOutcome {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Registration form state and its event handlers
#[derive(Debug)]
pub struct RegistrationForm {
    values: FormValues,
    errors: ErrorMap,
    touched: TouchedSet,
    rules: RuleSet,
    submit_policy: SubmitTouchPolicy,
}

impl RegistrationForm {
    pub fn new(rules: RuleSet, submit_policy: SubmitTouchPolicy) -> Self {
        Self {
            values: FormValues::new(),
            errors: ErrorMap::new(),
            touched: TouchedSet::new(),
            rules,
            submit_policy,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    /// Error to show for a field: present only once the field is touched
    pub fn visible_error(&self, field: FieldId) -> Option<&FieldError> {
        if !self.touched.is_touched(field) {
            return None;
        }
        self.errors.get(field)
    }

    /// A field's value changed
    ///
    /// Touched fields are re-validated against the updated values; untouched
    /// fields never gain an error from typing alone.
    pub fn on_value_changed(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
        if self.touched.is_touched(field) {
            let verdict = self
                .rules
                .validate_field(field, self.values.get(field), &self.values);
            tracing::trace!(%field, valid = verdict.is_none(), "revalidated on change");
            self.errors.set(field, verdict);
        }
    }

    /// Focus left a field holding `value`
    ///
    /// Stored values are not updated here; cross-field rules read the stored
    /// values of the other fields.
    pub fn on_field_blurred(&mut self, field: FieldId, value: &str) {
        self.touched.touch(field);
        let verdict = self.rules.validate_field(field, value, &self.values);
        tracing::trace!(%field, valid = verdict.is_none(), "validated on blur");
        self.errors.set(field, verdict);
    }

    /// The form was submitted
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.touched.touch_all(self.submit_policy.fields().iter().copied());

        if !self.validate_form() {
            let errors = self.errors.len();
            let fields: Vec<&str> = self.errors.iter().map(|(f, _)| f.wire_name()).collect();
            tracing::debug!(errors, ?fields, "submission rejected");
            return SubmitOutcome::Rejected { errors };
        }

        let registration = Registration::from_values(&self.values);
        self.reset();
        tracing::info!(registration = %registration.summary(), "registration accepted");
        SubmitOutcome::Accepted(registration)
    }

    /// Replace the error map with a full validation pass; true when valid
    fn validate_form(&mut self) -> bool {
        self.errors = self.rules.validate_form(&self.values);
        self.errors.is_empty()
    }

    fn reset(&mut self) {
        self.values = FormValues::new();
        self.errors = ErrorMap::new();
        self.touched = TouchedSet::new();
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(RuleSet::default(), SubmitTouchPolicy::default())
    }
}
