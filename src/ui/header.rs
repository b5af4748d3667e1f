// SPDX-License-Identifier: MPL-2.0
//! Branded header fragment shown above the form.
//!
//! The header is a pure display fragment: it emits no messages and reads
//! no form state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, Column, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the header.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        });

    let subtitle = Text::new(ctx.i18n.tr("header-subtitle"))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    container(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}
