//! Application state and key handling

use crate::config::TuiConfig;
use crate::state::{AppState, RegistrationForm, SubmitOutcome};
use crate::validation::RuleSet;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let form = RegistrationForm::new(RuleSet::default(), config.submit_touch_policy());
        Self::with_state(AppState::new(form, config.mask_passwords()))
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The success notice is modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if Self::is_submit_chord(&key) => self.submit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c)
            }
            _ => {}
        }
    }

    fn is_submit_chord(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
    }

    fn submit(&mut self) {
        if let SubmitOutcome::Rejected { errors } = self.state.submit() {
            tracing::debug!(errors, focused = %self.state.focused, "submit refused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, SubmitTouchPolicy};
    use crate::validation::{FieldError, MockClock};

    fn test_app() -> App {
        let mut clock = MockClock::new();
        clock.expect_current_year().return_const(2026);
        let form = RegistrationForm::new(
            RuleSet::new(Box::new(clock)),
            SubmitTouchPolicy::AllFields,
        );
        App::with_state(AppState::new(form, true))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid(app: &mut App) {
        let entries = [
            "Linus",
            "linus@example.org",
            "3585550100",
            "1969-12-28",
            "Finland",
            "penguin",
            "penguin",
        ];
        for text in entries {
            type_str(app, text);
            press(app, KeyCode::Tab);
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn test_escape_quits() {
            let mut app = test_app();
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_chars_go_to_focused_field() {
            let mut app = test_app();
            type_str(&mut app, "Linus");
            assert_eq!(app.state.form.values().get(FieldId::Name), "Linus");
        }

        #[test]
        fn test_ctrl_char_is_not_typed() {
            let mut app = test_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert_eq!(app.state.focused_value(), "");
        }

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focused, FieldId::Email);
            press(&mut app, KeyCode::Down);
            assert_eq!(app.state.focused, FieldId::Phone);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.focused, FieldId::Email);
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.focused, FieldId::Name);
        }

        #[test]
        fn test_leaving_invalid_field_shows_error() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, "abc");
            press(&mut app, KeyCode::Tab);
            assert_eq!(
                app.state.form.visible_error(FieldId::Email),
                Some(&FieldError::EmailInvalid)
            );
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_enter_on_empty_form_shows_all_errors() {
            let mut app = test_app();
            press(&mut app, KeyCode::Enter);
            for field in FieldId::ALL {
                assert!(app.state.form.visible_error(field).is_some(), "{field}");
            }
            assert!(!app.state.has_notice());
        }

        #[test]
        fn test_ctrl_s_submits() {
            let mut app = test_app();
            fill_valid(&mut app);
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert!(app.state.has_notice());
            assert!(app.state.form.values().is_pristine());
        }

        #[test]
        fn test_notice_is_modal_until_dismissed() {
            let mut app = test_app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.has_notice());

            type_str(&mut app, "ignored");
            assert_eq!(app.state.focused_value(), "");
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_notice());
            assert!(!app.should_quit());
        }
    }
}
