// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The tick only runs while a notification is visible; an idle form needs
/// no wakeups.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
