// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::faded;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

/// Gradient call-to-action in the hero banner.
pub fn primary(
    colors: &ColorScheme,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let start = colors.brand_start;
    let end = colors.brand_end;

    move |_theme: &Theme, status: button::Status| {
        let glow = match status {
            button::Status::Hovered => opacity::HOVER,
            _ => opacity::OPAQUE,
        };
        let gradient = Linear::new(Radians(FRAC_PI_2))
            .add_stop(0.0, faded(start, alpha * glow))
            .add_stop(1.0, faded(end, alpha * glow));

        button::Style {
            background: Some(Background::Gradient(gradient.into())),
            text_color: faded(palette::WHITE, alpha),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::SM
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Outlined secondary action in the hero banner.
pub fn outline(
    colors: &ColorScheme,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let border = colors.border;
    let text = colors.text_primary;
    let accent = colors.accent;

    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ => border,
        };

        button::Style {
            background: None,
            text_color: faded(text, alpha),
            border: Border {
                color: faded(border_color, alpha),
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Solid button tinted with the contact channel's brand color.
pub fn contact(tint: Color, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let level = match status {
            button::Status::Hovered => opacity::HOVER,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: Some(Background::Color(faded(tint, alpha * level))),
            text_color: faded(palette::WHITE, alpha),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flag button in the language toggle. The active locale gets an accent ring.
pub fn flag(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = colors.accent;

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::TINT,
                ..palette::WHITE
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: palette::WHITE,
            border: Border {
                color: if active { accent } else { Color::TRANSPARENT },
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn contact_button_fades_with_reveal() {
        let style = contact(palette::LINKEDIN, 0.5)(&Theme::Dark, button::Status::Active);
        assert_abs_diff_eq!(style.text_color.a, 0.5);
        match style.background {
            Some(Background::Color(color)) => assert_abs_diff_eq!(color.a, 0.5),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn flag_ring_marks_only_active_locale() {
        let colors = ColorScheme::dark();
        let active = flag(&colors, true)(&Theme::Dark, button::Status::Active);
        let idle = flag(&colors, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.border.color, colors.accent);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn outline_highlights_border_on_hover() {
        let colors = ColorScheme::light();
        let hovered = outline(&colors, 1.0)(&Theme::Light, button::Status::Hovered);
        assert_eq!(hovered.border.color, colors.accent);
        assert!(hovered.background.is_none());
    }
}
