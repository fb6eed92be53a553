// SPDX-License-Identifier: MPL-2.0
//! Locale selection for the two supported display languages.
//!
//! The page speaks Portuguese by default and English on request. There is no
//! translation framework: each [`Locale`] maps to one hand-written
//! [`StringBundle`], and [`LocaleStore`] is the single place the active
//! selection lives.
//!
//! # Startup resolution
//!
//! The initial locale is resolved in this order:
//! 1. `--lang` CLI argument
//! 2. `language` in the `[general]` section of `settings.toml`
//! 3. The OS locale, only when `follow_system_locale = true`
//! 4. [`Locale::Pt`]
//!
//! Tags that do not name a supported language are skipped, not rejected.

pub mod bundle;

pub use bundle::{StringBundle, TextKey};

use crate::config::GeneralConfig;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Display language of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Portuguese, the primary locale.
    #[default]
    Pt,
    /// English, the secondary locale.
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Short language code used in tags and logs.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Parses a BCP-47 tag such as `pt`, `pt-BR` or `en-US`.
    ///
    /// Only the language subtag is considered. POSIX-style tags from the OS
    /// (`pt_BR.UTF-8`) are normalized before parsing.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let normalized = tag.split('.').next().unwrap_or(tag).replace('_', "-");
        let langid = normalized.parse::<LanguageIdentifier>().ok()?;
        match langid.language.as_str() {
            "pt" => Some(Locale::Pt),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Holds the active locale and exposes its bundle.
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    current: Locale,
}

impl LocaleStore {
    #[must_use]
    pub fn new(initial: Locale) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current
    }

    /// Switches the active locale. Returns `false` when `locale` was already
    /// active, in which case nothing changes.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if self.current == locale {
            return false;
        }
        tracing::info!(from = %self.current, to = %locale, "locale changed");
        self.current = locale;
        true
    }

    #[must_use]
    pub fn bundle(&self) -> &'static StringBundle {
        StringBundle::for_locale(self.current)
    }

    #[must_use]
    pub fn text(&self, key: TextKey) -> &'static str {
        self.bundle().get(key)
    }
}

/// Resolves the startup locale, querying the OS only when the config asks
/// for it.
#[must_use]
pub fn resolve_startup_locale(cli_lang: Option<&str>, general: &GeneralConfig) -> Locale {
    let system = if general.follow_system_locale {
        sys_locale::get_locale()
    } else {
        None
    };
    resolve_locale(cli_lang, general.language.as_deref(), system.as_deref())
}

fn resolve_locale(cli_lang: Option<&str>, config_lang: Option<&str>, system: Option<&str>) -> Locale {
    [cli_lang, config_lang, system]
        .into_iter()
        .flatten()
        .find_map(Locale::from_tag)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_primary() {
        let store = LocaleStore::default();
        assert_eq!(store.current_locale(), Locale::Pt);
        assert_eq!(store.text(TextKey::ContactLabel), "Entre em Contato");
    }

    #[test]
    fn set_locale_reads_back_for_both_values() {
        let mut store = LocaleStore::default();
        for locale in [Locale::En, Locale::Pt] {
            store.set_locale(locale);
            assert_eq!(store.current_locale(), locale);
        }
    }

    #[test]
    fn set_locale_is_idempotent() {
        let mut store = LocaleStore::default();
        assert!(store.set_locale(Locale::En));
        assert!(!store.set_locale(Locale::En));
        assert_eq!(store.current_locale(), Locale::En);
        assert_eq!(store.text(TextKey::ContactLabel), "Contact Me");
    }

    #[test]
    fn from_tag_accepts_regional_and_posix_variants() {
        assert_eq!(Locale::from_tag("pt"), Some(Locale::Pt));
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en_GB.UTF-8"), Some(Locale::En));
    }

    #[test]
    fn from_tag_rejects_unsupported_languages() {
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag("not a tag"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn resolve_prefers_cli_over_config_and_system() {
        let lang = resolve_locale(Some("en"), Some("pt"), Some("pt-BR"));
        assert_eq!(lang, Locale::En);
    }

    #[test]
    fn resolve_skips_unsupported_cli_tag() {
        let lang = resolve_locale(Some("de"), Some("en-US"), None);
        assert_eq!(lang, Locale::En);
    }

    #[test]
    fn resolve_uses_system_last() {
        assert_eq!(resolve_locale(None, None, Some("en-AU")), Locale::En);
    }

    #[test]
    fn resolve_defaults_to_primary() {
        assert_eq!(resolve_locale(None, None, None), Locale::Pt);
        assert_eq!(resolve_locale(None, Some("ja"), Some("ko")), Locale::Pt);
    }

    #[test]
    fn startup_ignores_system_unless_enabled() {
        let general = GeneralConfig {
            language: None,
            follow_system_locale: false,
            ..GeneralConfig::default()
        };
        assert_eq!(resolve_startup_locale(None, &general), Locale::Pt);
    }
}
