// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SubmitError;
use crate::ui::notifications;
use crate::ui::password_reset;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(password_reset::Message),
    Notification(notifications::NotificationMessage),
    /// The password-reset request finished, successfully or not.
    ResetCompleted(Result<(), SubmitError>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional platform origin override (e.g. a staging server).
    pub server: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_RECOVER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
