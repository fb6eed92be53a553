// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theming for the page.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Page background gradient
    pub page_top: Color,
    pub page_bottom: Color,

    // Surfaces
    pub band: Color,
    pub card: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_start: Color,
    pub brand_end: Color,
    pub accent: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_top: palette::GRAY_50,
            page_bottom: palette::GRAY_100,

            band: Color {
                a: opacity::BAND,
                ..palette::GRAY_300
            },
            card: palette::WHITE,
            border: palette::GRAY_300,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_400,

            brand_start: palette::BLUE_600,
            brand_end: palette::PURPLE_500,
            accent: palette::BLUE_600,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_top: palette::GRAY_900,
            page_bottom: palette::GRAY_800,

            band: Color {
                a: opacity::CARD,
                ..palette::GRAY_800
            },
            card: palette::GRAY_700,
            border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            brand_start: palette::BLUE_400,
            brand_end: palette::PURPLE_500,
            accent: palette::BLUE_500,
        }
    }

    /// Scheme for an already resolved light/dark choice.
    #[must_use]
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Built-in Iced theme for a resolved light/dark choice.
#[must_use]
pub fn iced_theme(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
