//! Application state definitions

use super::forms::{FieldId, Registration, RegistrationForm, SubmitOutcome};

/// Acknowledgement shown after an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionNotice {
    pub message: String,
}

impl SubmissionNotice {
    fn for_registration(registration: &Registration) -> Self {
        Self {
            message: format!(
                "Registration successful!\n{} <{}>",
                registration.name.trim(),
                registration.email
            ),
        }
    }
}

/// Everything the UI reads to draw a frame
#[derive(Debug)]
pub struct AppState {
    /// The registration form; only mutated through its event handlers
    pub form: RegistrationForm,
    /// Field holding the cursor
    pub focused: FieldId,
    /// Pending success acknowledgement
    pub notice: Option<SubmissionNotice>,
    /// Render password fields as bullets
    pub mask_passwords: bool,
}

impl AppState {
    pub fn new(form: RegistrationForm, mask_passwords: bool) -> Self {
        Self {
            form,
            focused: FieldId::ALL[0],
            notice: None,
            mask_passwords,
        }
    }

    /// Value of the focused field
    pub fn focused_value(&self) -> &str {
        self.form.values().get(self.focused)
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.form.on_value_changed(self.focused, value);
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.form.on_value_changed(self.focused, value);
        }
    }

    /// Leave the focused field and move to the next one
    pub fn next_field(&mut self) {
        self.move_focus(self.focused.next());
    }

    /// Leave the focused field and move to the previous one
    pub fn prev_field(&mut self) {
        self.move_focus(self.focused.prev());
    }

    /// Leave the focused field for `target`
    pub fn move_focus(&mut self, target: FieldId) {
        if target == self.focused {
            return;
        }
        let value = self.focused_value().to_string();
        self.form.on_field_blurred(self.focused, &value);
        self.focused = target;
    }

    /// Submit the form; an accepted submission raises the notice, a
    /// rejected one moves focus to the first error on display
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.on_submit();
        match &outcome {
            SubmitOutcome::Accepted(registration) => {
                self.notice = Some(SubmissionNotice::for_registration(registration));
                self.focused = FieldId::ALL[0];
            }
            SubmitOutcome::Rejected { .. } => {
                if let Some(field) = self.first_visible_error() {
                    self.focused = field;
                }
            }
        }
        outcome
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    /// First field in registry order whose error is on display
    pub fn first_visible_error(&self) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|field| self.form.visible_error(*field).is_some())
    }

    /// Text to render for a field's value
    pub fn display_value(&self, field: FieldId) -> String {
        let value = self.form.values().get(field);
        if self.mask_passwords && field.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RegistrationForm::default(), true)
    }
}
