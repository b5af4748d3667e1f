// SPDX-License-Identifier: MPL-2.0
//! Messages and events for the password-reset form.

use crate::app::config::{SIGN_UP_CLIENT_PATH, SIGN_UP_VOLUNTEER_PATH};

/// Which sign-up page a secondary link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpRole {
    Client,
    Volunteer,
}

impl SignUpRole {
    /// Platform-relative path of the sign-up page.
    pub fn path(self) -> &'static str {
        match self {
            SignUpRole::Client => SIGN_UP_CLIENT_PATH,
            SignUpRole::Volunteer => SIGN_UP_VOLUNTEER_PATH,
        }
    }

    /// i18n key for the link label.
    pub fn label_key(self) -> &'static str {
        match self {
            SignUpRole::Client => "password-reset-sign-up-client",
            SignUpRole::Volunteer => "password-reset-sign-up-volunteer",
        }
    }
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The email field value changed.
    EmailChanged(String),
    /// The submit button was pressed (or Enter in the email field).
    SubmitPressed,
    /// One of the secondary sign-up links was pressed.
    SignUpPressed(SignUpRole),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validation passed; the parent should submit the reset request.
    Submit { email: String },
    /// The parent should open the sign-up page for this role.
    OpenSignUp(SignUpRole),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_paths_match_platform_routes() {
        assert_eq!(SignUpRole::Client.path(), "/sign_up/client");
        assert_eq!(SignUpRole::Volunteer.path(), "/sign_up/volunteer");
    }
}
