// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers invoked by
//! `App::update` for different parts of the application.

use super::{browser, Message};
use crate::api::PasswordService;
use crate::error::SubmitError;
use crate::ui::notifications::{self, Notification};
use crate::ui::password_reset::{self, Event as FormEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub form: &'a mut password_reset::State,
    pub notifications: &'a mut notifications::Manager,
    pub service: &'a PasswordService,
}

/// Handles form component messages.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: password_reset::Message,
) -> Task<Message> {
    match ctx.form.handle_message(message) {
        FormEvent::None => Task::none(),
        FormEvent::Submit { email } => {
            // One request per accepted submit; completion comes back as a
            // single ResetCompleted message.
            let service = ctx.service.clone();
            Task::perform(
                async move { service.request_reset(&email).await },
                Message::ResetCompleted,
            )
        }
        FormEvent::OpenSignUp(role) => {
            let url = ctx.service.url_for(role.path());
            if browser::open_in_browser(&url).is_err() {
                ctx.notifications
                    .show(Notification::warning("notification-open-link-error"));
            }
            Task::none()
        }
    }
}

/// Handles completion of the password-reset request.
///
/// Success and failure both surface as a transient toast; the failure
/// text supplied by the submission service is carried as the `$reason`
/// argument and resolved at render time.
pub fn handle_reset_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), SubmitError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications
                .show(Notification::success("notification-reset-success"));
        }
        Err(error) => {
            ctx.notifications.show(
                Notification::error(error.i18n_key()).with_arg("reason", error.message()),
            );
        }
    }
    Task::none()
}
