// SPDX-License-Identifier: MPL-2.0
//! Password-reset form component.
//!
//! The component owns the email field value and its validation errors.
//! Submission and navigation are delegated upward through [`Event`]s:
//! the parent spawns the network task and opens sign-up pages, keeping
//! this component free of side effects.

mod messages;
mod state;
mod view;

pub use messages::{Event, Message, SignUpRole};
pub use state::State;
pub use view::{view, ViewContext};
