// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification.
//!
//! The toast is a small card with a severity-colored accent border and a
//! dismiss button, floating above the form near the bottom of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        // Resolve the message text using i18n with optional arguments
        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("\u{00D7}").size(typography::BODY))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay for the visible notification, if any.
    ///
    /// Positions the toast bottom-centered above the form.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        match manager.visible() {
            None => {
                // Empty container that takes no space
                Container::new(text(""))
                    .width(Length::Shrink)
                    .height(Length::Shrink)
                    .into()
            }
            Some(notification) => Container::new(Self::view(notification, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG)
                .into(),
        }
    }
}
