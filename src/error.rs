// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
}

/// Failure of a password-reset submission.
///
/// The submission service classifies the outcome once; the rest of the
/// application treats every variant identically (one notification path,
/// no retry). The carried message is the human-readable text shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never produced an HTTP response (DNS failure,
    /// connection refused, timeout, TLS error).
    Network(String),

    /// The server answered with a non-success status.
    Status { code: u16, message: String },
}

impl SubmitError {
    /// Returns the i18n message key for the failure notification.
    ///
    /// All submission failures share one key; the cause is deliberately
    /// not distinguished in presentation.
    pub fn i18n_key(&self) -> &'static str {
        "notification-reset-error"
    }

    /// The human-readable failure text, interpolated into the
    /// notification as `$reason`.
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Network(msg) => msg,
            SubmitError::Status { message, .. } => message,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "Network error: {}", msg),
            SubmitError::Status { code, message } => {
                write!(f, "Request failed ({}): {}", code, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
