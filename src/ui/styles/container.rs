// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::PI;

/// Vertical gradient behind the whole page.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let top = colors.page_top;
    let bottom = colors.page_bottom;
    let text = colors.text_primary;

    move |_theme: &Theme| {
        let gradient = Linear::new(Radians(PI))
            .add_stop(0.0, top)
            .add_stop(1.0, bottom);

        container::Style {
            text_color: Some(text),
            background: Some(Background::Gradient(gradient.into())),
            ..container::Style::default()
        }
    }
}

/// Translucent full-width band behind the about and contact sections.
pub fn band(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let band = colors.band;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(band)),
        ..container::Style::default()
    }
}

/// Rounded card holding a revealable block.
pub fn card(colors: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let surface = Color {
        a: opacity::CARD,
        ..colors.card
    };
    let border = colors.border;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(surface, alpha))),
        border: Border {
            color: faded(border, alpha),
            width: 1.0,
            radius: radius::XL.into(),
        },
        ..container::Style::default()
    }
}

/// Footer strip with a top border.
pub fn footer(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let border = colors.border;
    let text = colors.text_muted;

    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        border: Border {
            color: border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Pill behind the language toggle.
pub fn toggle_bar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = Color {
        a: opacity::HOVER,
        ..colors.page_top
    };
    let border = colors.border;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn card_is_invisible_before_reveal() {
        let style = card(&ColorScheme::dark(), 0.0)(&Theme::Dark);
        assert_abs_diff_eq!(style.border.color.a, 0.0);
        match style.background {
            Some(Background::Color(color)) => assert_abs_diff_eq!(color.a, 0.0),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn page_sets_text_color_from_scheme() {
        let colors = ColorScheme::light();
        let style = page(&colors)(&Theme::Light);
        assert_eq!(style.text_color, Some(colors.text_primary));
    }
}
