// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style pour liens secondaires (texte brand, sans fond).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => match theme {
            Theme::Light => palette::PRIMARY_600,
            _ => palette::PRIMARY_500,
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the toast dismiss button (quiet, main text color).
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
