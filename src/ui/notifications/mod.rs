// SPDX-License-Identifier: MPL-2.0
//! Transient notification shown after a submission completes.
//!
//! The application shows at most one toast at a time. Showing a new
//! notification replaces the current one and restarts its lifetime, so a
//! dismissal deadline scheduled for a replaced toast can never hide its
//! successor. Toasts auto-dismiss after a fixed delay or on the close
//! button.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - Single-slot lifecycle management and auto-dismiss
//! - [`toast`] - Toast widget component for rendering the notification

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity, DISPLAY_DURATION};
pub use toast::Toast;
