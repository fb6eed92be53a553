// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG artwork for the language toggle.
//!
//! Flags are embedded at compile time with `rust-embed` and their handles are
//! cached in a `OnceLock` so every frame reuses the same parsed tree.

use crate::locale::Locale;
use crate::ui::design_tokens::sizing;
use iced::widget::svg::{Handle, Svg};
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/flags/"]
struct Flags;

/// File name of the flag shown for `locale`.
fn flag_file(locale: Locale) -> String {
    format!("{}.svg", locale.code())
}

fn load_handle(locale: Locale) -> Handle {
    match Flags::get(&flag_file(locale)) {
        Some(file) => Handle::from_memory(file.data.into_owned()),
        None => {
            tracing::warn!(locale = %locale, "missing flag artwork");
            Handle::from_memory(Vec::new())
        }
    }
}

fn handle(locale: Locale) -> Handle {
    static PT: OnceLock<Handle> = OnceLock::new();
    static EN: OnceLock<Handle> = OnceLock::new();

    let cell = match locale {
        Locale::Pt => &PT,
        Locale::En => &EN,
    };
    cell.get_or_init(|| load_handle(locale)).clone()
}

/// Flag widget for the language toggle.
pub fn flag(locale: Locale) -> Svg<'static> {
    Svg::new(handle(locale))
        .width(sizing::FLAG_WIDTH)
        .height(sizing::FLAG_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_embedded_flag() {
        for locale in Locale::ALL {
            let file = Flags::get(&flag_file(locale)).expect("flag is embedded");
            let source = std::str::from_utf8(&file.data).expect("svg is utf-8");
            assert!(source.contains("<svg"), "{locale} flag is not an svg");
        }
    }
}
