// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification carries an i18n message key plus string arguments; the
//! display text is resolved only at render time, so notification state
//! stays plain data.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays visible before auto-dismissing.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(2000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
///
/// Every severity shares the same transient lifetime; the toast is a
/// snackbar, not a persistent alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Something degraded but the app keeps working (orange).
    Warning,
    /// An operation failed (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines accent color).
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    ///
    /// Arguments are passed to the i18n system when resolving the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification has outlived its display time.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.age() >= DISPLAY_DURATION
    }

    /// Moves the creation time into the past, for deadline tests.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created_at -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn fresh_notification_does_not_auto_dismiss() {
        let notification = Notification::success("test");
        assert!(!notification.should_auto_dismiss());
    }

    #[test]
    fn expired_notification_auto_dismisses() {
        let mut notification = Notification::error("test");
        notification.backdate(DISPLAY_DURATION);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn notification_just_under_deadline_stays() {
        let mut notification = Notification::success("test");
        notification.backdate(DISPLAY_DURATION - Duration::from_millis(100));
        assert!(!notification.should_auto_dismiss());
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("test-error")
            .with_arg("reason", "Server error")
            .with_arg("code", "500");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "test-error");
        assert_eq!(notification.message_args().len(), 2);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }
}
