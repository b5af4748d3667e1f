// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the form component, localization, the
//! submission service, and the transient notification manager, and
//! translates messages into side effects like the reset request or
//! opening a sign-up page. Policy decisions (window sizing, tick cadence,
//! notification lifetime) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod browser;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::PasswordService;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::password_reset;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Root Iced application state bridging the form, localization, and the
/// submission service.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Password-reset form component state.
    form: password_reset::State,
    /// Transient toast shown after a submission completes.
    notifications: notifications::Manager,
    /// HTTP client for the platform's password endpoint.
    service: PasswordService,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("email", &self.form.email)
            .field("notification_visible", &self.notifications.is_visible())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            form: password_reset::State::new(),
            notifications: notifications::Manager::new(),
            service: PasswordService::new(
                config::DEFAULT_BASE_URL,
                config::DEFAULT_REQUEST_TIMEOUT_SECS,
            )
            .expect("HTTP client initialization failed"),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        // CLI --server beats the configured platform origin for this session.
        let base_url = flags
            .server
            .unwrap_or_else(|| config.base_url().to_string());
        let service = PasswordService::new(&base_url, config.request_timeout_secs())
            .expect("HTTP client initialization failed");

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            form: password_reset::State::new(),
            notifications: notifications::Manager::new(),
            service,
        };

        if let Some(key) = config_warning {
            app.notifications
                .show(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            notifications: &mut self.notifications,
            service: &self.service,
        };

        match message {
            Message::Form(msg) => update::handle_form_message(&mut ctx, msg),
            Message::ResetCompleted(result) => update::handle_reset_completed(&mut ctx, result),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick while a toast is visible; expiry is checked
                // against the toast's own creation time.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::ui::notifications::{Severity, DISPLAY_DURATION};
    use crate::ui::password_reset::Message as FormMessage;
    use std::time::Instant;

    fn type_email(app: &mut App, email: &str) {
        let _ = app.update(Message::Form(FormMessage::EmailChanged(email.to_string())));
    }

    #[test]
    fn title_uses_localized_app_name() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(app.title(), "Tandem Account Recovery");
    }

    #[test]
    fn submit_with_invalid_email_sets_inline_error_only() {
        let mut app = App::default();
        type_email(&mut app, "not-an-email");

        let _ = app.update(Message::Form(FormMessage::SubmitPressed));

        assert!(app.form.errors.has_errors());
        // Validation errors render inline, never as a toast.
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn successful_reset_shows_success_toast() {
        let mut app = App::default();

        let _ = app.update(Message::ResetCompleted(Ok(())));

        let toast = app.notifications.visible().expect("toast should be shown");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "notification-reset-success");
    }

    #[test]
    fn failed_reset_shows_error_toast_with_reason() {
        let mut app = App::default();

        let error = SubmitError::Status {
            code: 500,
            message: "Server error".to_string(),
        };
        let _ = app.update(Message::ResetCompleted(Err(error)));

        let toast = app.notifications.visible().expect("toast should be shown");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-reset-error");
        assert_eq!(
            toast.message_args(),
            &[("reason".to_string(), "Server error".to_string())]
        );
    }

    #[test]
    fn failure_toast_resolves_to_verbatim_reason() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());

        let error = SubmitError::Network("connection refused".to_string());
        let _ = app.update(Message::ResetCompleted(Err(error)));

        let toast = app.notifications.visible().unwrap();
        let text = app
            .i18n
            .tr_with_args("notification-reset-error", &[("reason", "connection refused")]);
        assert!(text.contains("connection refused"));
        assert_eq!(toast.message_key(), "notification-reset-error");
    }

    #[test]
    fn tick_hides_expired_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ResetCompleted(Ok(())));
        assert!(app.notifications.is_visible());

        // Simulate 2000ms elapsing, then a tick.
        let mut expired = app.notifications.visible().unwrap().clone();
        expired.backdate(DISPLAY_DURATION);
        app.notifications.show(expired);
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn tick_keeps_fresh_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ResetCompleted(Ok(())));

        let _ = app.update(Message::Tick(Instant::now()));

        assert!(app.notifications.is_visible());
    }

    #[test]
    fn second_outcome_replaces_first_toast() {
        let mut app = App::default();

        let _ = app.update(Message::ResetCompleted(Ok(())));
        let error = SubmitError::Status {
            code: 503,
            message: "unavailable".to_string(),
        };
        let _ = app.update(Message::ResetCompleted(Err(error)));

        let toast = app.notifications.visible().unwrap();
        assert_eq!(toast.severity(), Severity::Error);
    }

    #[test]
    fn subscription_is_idle_without_notifications() {
        let app = App::default();
        // No toast: the tick subscription must be none, i.e. the app does
        // not wake up while idle. We can only assert indirectly that no
        // notification is visible, which gates the subscription.
        assert!(!app.notifications.is_visible());
        let _ = app.subscription();
    }
}
