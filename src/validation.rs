// SPDX-License-Identifier: MPL-2.0
//! Form validation for the password-reset screen.
//!
//! Validation is a plain function invoked by the form component; the
//! result carries i18n message *keys*, not resolved text, so field
//! errors stay serializable and are localized only at render time.

use regex::Regex;
use std::sync::OnceLock;

/// Message key shown when the email is missing or malformed.
pub const INVALID_EMAIL_KEY: &str = "password-reset-invalid-email";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Lightweight syntactic email check.
///
/// Requires a local part, an `@`, and a domain with at least two
/// dot-separated components (`a@b` is rejected, `a@b.co` accepted).
/// Deliverability is the server's problem.
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Per-field validation errors, each holding an i18n message key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
}

impl FieldErrors {
    /// Returns true if any field has a validation error.
    pub fn has_errors(&self) -> bool {
        self.email.is_some()
    }
}

/// Outcome of validating the form as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub field_errors: FieldErrors,
}

/// Validates the password-reset form.
///
/// The email is required; an empty value and a malformed one produce the
/// same message key.
pub fn validate(email: &str) -> ValidationReport {
    let email_error = if email_pattern().is_match(email.trim()) {
        None
    } else {
        Some(INVALID_EMAIL_KEY)
    };

    ValidationReport {
        valid: email_error.is_none(),
        field_errors: FieldErrors { email: email_error },
    }
}
