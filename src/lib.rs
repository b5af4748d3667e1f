// SPDX-License-Identifier: MPL-2.0
//! `iced_recover` is the desktop account-recovery client for the Tandem
//! tutoring platform, built with the Iced GUI framework.
//!
//! It renders a single password-reset form, validates the email address
//! locally, submits the reset request to the platform, and reports the
//! outcome through transient toast notifications. Internationalization is
//! handled with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_recover/0.2.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod validation;
