// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns a single notification slot. Showing a notification
//! replaces whatever is currently visible, and the auto-dismiss deadline
//! always derives from the visible notification's own creation time.
//! A deadline belonging to a replaced notification therefore cannot hide
//! its replacement early.

use super::notification::{Notification, NotificationId};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking the auto-dismiss deadline.
    Tick,
}

/// Manages the single visible notification.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notification, if any.
    current: Option<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing the current one.
    ///
    /// The replacement starts a fresh display lifetime.
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the visible notification matched and was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Processes a tick event, dismissing the notification once it has
    /// outlived its display time.
    ///
    /// Should be called periodically (e.g., every 100ms) while a
    /// notification is visible.
    pub fn tick(&mut self) {
        if self
            .current
            .as_ref()
            .is_some_and(Notification::should_auto_dismiss)
        {
            self.current = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notification.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns whether a notification is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the visible notification.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::DISPLAY_DURATION;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.is_visible());
        assert!(manager.visible().is_none());
    }

    #[test]
    fn show_makes_notification_visible() {
        let mut manager = Manager::new();
        manager.show(Notification::success("test"));

        assert!(manager.is_visible());
        assert_eq!(manager.visible().unwrap().message_key(), "test");
    }

    #[test]
    fn show_replaces_current_notification() {
        let mut manager = Manager::new();
        manager.show(Notification::success("first"));
        manager.show(Notification::error("second"));

        assert_eq!(manager.visible().unwrap().message_key(), "second");
    }

    #[test]
    fn dismiss_removes_matching_notification() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.show(notification);
        assert!(manager.dismiss(id));
        assert!(!manager.is_visible());
    }

    #[test]
    fn dismiss_with_stale_id_is_ignored() {
        let mut manager = Manager::new();
        let stale = Notification::success("old");
        let stale_id = stale.id();

        manager.show(Notification::success("current"));
        assert!(!manager.dismiss(stale_id));
        assert!(manager.is_visible());
    }

    #[test]
    fn tick_keeps_fresh_notification() {
        let mut manager = Manager::new();
        manager.show(Notification::success("test"));

        manager.tick();
        assert!(manager.is_visible());
    }

    #[test]
    fn tick_dismisses_expired_notification() {
        let mut manager = Manager::new();
        let mut notification = Notification::success("test");
        notification.backdate(DISPLAY_DURATION);

        manager.show(notification);
        manager.tick();
        assert!(!manager.is_visible());
    }

    #[test]
    fn replacement_restarts_the_deadline() {
        let mut manager = Manager::new();

        // First notification is old enough that its deadline has passed.
        let mut first = Notification::success("first");
        first.backdate(DISPLAY_DURATION);
        manager.show(first);

        // The replacement arrives before any tick ran.
        manager.show(Notification::error("second"));

        // The stale deadline must not clip the fresh notification.
        manager.tick();
        assert!(manager.is_visible());
        assert_eq!(manager.visible().unwrap().message_key(), "second");
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.show(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.is_visible());
    }

    #[test]
    fn clear_removes_notification() {
        let mut manager = Manager::new();
        manager.show(Notification::warning("test"));

        manager.clear();
        assert!(!manager.is_visible());
    }
}
