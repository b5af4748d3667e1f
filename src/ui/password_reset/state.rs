// SPDX-License-Identifier: MPL-2.0
//! State management for the password-reset form.

use super::messages::{Event, Message};
use crate::validation::{self, FieldErrors};

/// State for the password-reset form.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current email field value.
    pub email: String,
    /// Validation errors, keyed to i18n messages.
    pub errors: FieldErrors,
}

impl State {
    /// Creates a form with an empty email and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a form message and returns the event for the parent.
    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                // While an error is showing, re-validate on every edit so
                // the inline message clears as soon as the value is fixed.
                if self.errors.has_errors() {
                    self.errors = validation::validate(&self.email).field_errors;
                }
                Event::None
            }
            Message::SubmitPressed => {
                let report = validation::validate(&self.email);
                self.errors = report.field_errors;
                if report.valid {
                    Event::Submit {
                        email: self.email.trim().to_string(),
                    }
                } else {
                    Event::None
                }
            }
            Message::SignUpPressed(role) => Event::OpenSignUp(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::password_reset::SignUpRole;
    use crate::validation::INVALID_EMAIL_KEY;

    #[test]
    fn fresh_state_is_empty_and_error_free() {
        let state = State::new();
        assert_eq!(state.email, "");
        assert!(!state.errors.has_errors());
    }

    #[test]
    fn email_change_updates_value_without_validating() {
        let mut state = State::new();
        let event = state.handle_message(Message::EmailChanged("partial@".to_string()));

        assert_eq!(event, Event::None);
        assert_eq!(state.email, "partial@");
        // No error until a submit attempt; typing must not nag.
        assert!(!state.errors.has_errors());
    }

    #[test]
    fn submit_with_invalid_email_sets_error_and_blocks() {
        let mut state = State::new();
        state.handle_message(Message::EmailChanged("not-an-email".to_string()));
        let event = state.handle_message(Message::SubmitPressed);

        assert_eq!(event, Event::None);
        assert_eq!(state.errors.email, Some(INVALID_EMAIL_KEY));
    }

    #[test]
    fn submit_with_empty_email_blocks() {
        let mut state = State::new();
        let event = state.handle_message(Message::SubmitPressed);

        assert_eq!(event, Event::None);
        assert!(state.errors.has_errors());
    }

    #[test]
    fn submit_with_valid_email_emits_submit_event() {
        let mut state = State::new();
        state.handle_message(Message::EmailChanged("a@b.co".to_string()));
        let event = state.handle_message(Message::SubmitPressed);

        assert_eq!(
            event,
            Event::Submit {
                email: "a@b.co".to_string()
            }
        );
        assert!(!state.errors.has_errors());
    }

    #[test]
    fn submitted_email_is_trimmed() {
        let mut state = State::new();
        state.handle_message(Message::EmailChanged("  a@b.co ".to_string()));
        let event = state.handle_message(Message::SubmitPressed);

        assert_eq!(
            event,
            Event::Submit {
                email: "a@b.co".to_string()
            }
        );
    }

    #[test]
    fn fixing_the_email_clears_the_inline_error() {
        let mut state = State::new();
        state.handle_message(Message::EmailChanged("broken".to_string()));
        state.handle_message(Message::SubmitPressed);
        assert!(state.errors.has_errors());

        state.handle_message(Message::EmailChanged("user@example.com".to_string()));
        assert!(!state.errors.has_errors());
    }

    #[test]
    fn error_persists_while_still_invalid() {
        let mut state = State::new();
        state.handle_message(Message::EmailChanged("broken".to_string()));
        state.handle_message(Message::SubmitPressed);

        state.handle_message(Message::EmailChanged("still-broken".to_string()));
        assert!(state.errors.has_errors());
    }

    #[test]
    fn sign_up_press_is_forwarded() {
        let mut state = State::new();
        let event = state.handle_message(Message::SignUpPressed(SignUpRole::Volunteer));
        assert_eq!(event, Event::OpenSignUp(SignUpRole::Volunteer));
    }
}
