// SPDX-License-Identifier: MPL-2.0
//! HTTP submission service for password-reset requests.
//!
//! The service owns the HTTP client and the platform base URL. It issues
//! a single form-encoded POST per request and classifies the outcome:
//! any 2xx response is a success, anything else is a [`SubmitError`]
//! carrying a human-readable message. No retries, no cancellation.

use crate::error::SubmitError;
use std::time::Duration;

/// Relative endpoint receiving the reset request.
pub const RESET_ENDPOINT: &str = "/password";

/// Longest failure text taken from a response body before falling back
/// to the bare status line.
const MAX_BODY_MESSAGE_LEN: usize = 200;

const USER_AGENT: &str = concat!("IcedRecover/", env!("CARGO_PKG_VERSION"));

/// Client for the platform's password endpoints.
#[derive(Debug, Clone)]
pub struct PasswordService {
    client: reqwest::Client,
    base_url: String,
}

impl PasswordService {
    /// Creates a service for the given platform origin.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: &str, timeout_secs: u64) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the platform origin this service talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a platform-relative path against the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests a password reset for `email`.
    ///
    /// Sends `POST /password` with a form-encoded body containing exactly
    /// the `email` field. The response body of a success is ignored.
    pub async fn request_reset(&self, email: &str) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.url_for(RESET_ENDPOINT))
            .form(&[("email", email)])
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Status {
            code: status.as_u16(),
            message: failure_message(status.as_u16(), &body),
        })
    }
}

/// Extracts the display message for a failed response.
///
/// Servers usually answer with a short plain-text or HTML-free reason;
/// when the body is empty or unreasonably long the status line is used
/// instead.
fn failure_message(code: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_BODY_MESSAGE_LEN {
        format!("HTTP status: {}", code)
    } else {
        trimmed.to_string()
    }
}
