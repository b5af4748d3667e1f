// SPDX-License-Identifier: MPL-2.0
//! Default values for the application configuration.

/// Platform origin the client talks to when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://app.tandem-tutoring.org";

/// Timeout applied to each password-reset request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Platform path for the client sign-up page.
pub const SIGN_UP_CLIENT_PATH: &str = "/sign_up/client";

/// Platform path for the volunteer sign-up page.
pub const SIGN_UP_VOLUNTEER_PATH: &str = "/sign_up/volunteer";
