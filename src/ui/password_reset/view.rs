// SPDX-License-Identifier: MPL-2.0
//! View rendering for the password-reset form.

use super::messages::{Message, SignUpRole};
use super::state::State;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the password-reset form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut fields = Column::new().spacing(spacing::XS);

    // Prompt label above the input
    fields = fields.push(
        text(ctx.i18n.tr("password-reset-enter-email")).size(typography::BODY_SM),
    );

    // Email input, bound to the form state; Enter submits
    let input = text_input("", &ctx.state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::SubmitPressed)
        .padding(spacing::XS)
        .size(typography::BODY);
    fields = fields.push(input);

    // Inline validation error, resolved from its message key at render time
    if let Some(error_key) = ctx.state.errors.email {
        fields = fields.push(
            text(ctx.i18n.tr(error_key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let submit_button = button(
        Text::new(ctx.i18n.tr("password-reset-submit")).size(typography::BODY),
    )
    .on_press(Message::SubmitPressed)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let sign_up_links = Row::new()
        .spacing(spacing::MD)
        .push(sign_up_link(ctx.i18n, SignUpRole::Client))
        .push(sign_up_link(ctx.i18n, SignUpRole::Volunteer));

    let form = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(fields)
        .push(submit_button)
        .push(sign_up_links);

    let card = container(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::form_card);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XL)
        .into()
}

/// Build one secondary sign-up link.
fn sign_up_link<'a>(i18n: &I18n, role: SignUpRole) -> Element<'a, Message> {
    button(Text::new(i18n.tr(role.label_key())).size(typography::BODY_SM))
        .on_press(Message::SignUpPressed(role))
        .padding(spacing::XXS)
        .style(styles::button::link)
        .into()
}
