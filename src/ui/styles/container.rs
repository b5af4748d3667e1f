// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Color, Theme};

/// Style for the toast container with a severity-colored accent border.
pub fn toast(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for the form card holding the reset fields.
pub fn form_card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: iced::Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }
}
