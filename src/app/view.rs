// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the header, the password-reset form, and the toast overlay
//! into the window content.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::password_reset::{self, ViewContext as FormViewContext};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a password_reset::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(HeaderViewContext { i18n: ctx.i18n });

    let form = password_reset::view(FormViewContext {
        i18n: ctx.i18n,
        state: ctx.form,
    })
    .map(Message::Form);

    let base = Column::new()
        .push(header)
        .push(form)
        .width(Length::Fill)
        .height(Length::Fill);

    // The toast floats above the form; while hidden the overlay is empty.
    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
