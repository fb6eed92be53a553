// SPDX-License-Identifier: MPL-2.0
//! Hand-written string tables, one complete bundle per [`Locale`].
//!
//! Every bundle is a plain struct with one field per [`TextKey`], so a
//! missing translation is a compile error rather than a runtime fallback.

use super::Locale;

/// Keys of the translated display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Role,
    ContactLabel,
    LearnMoreLabel,
    AboutLabel,
    AboutBody,
    TechnologiesLabel,
    ChatLabel,
    RightsNotice,
}

impl TextKey {
    /// Every key, in page order.
    pub const ALL: [TextKey; 8] = [
        TextKey::Role,
        TextKey::ContactLabel,
        TextKey::LearnMoreLabel,
        TextKey::AboutLabel,
        TextKey::AboutBody,
        TextKey::TechnologiesLabel,
        TextKey::ChatLabel,
        TextKey::RightsNotice,
    ];
}

/// Complete set of translated strings for one locale.
#[derive(Debug)]
pub struct StringBundle {
    pub role: &'static str,
    pub contact_label: &'static str,
    pub learn_more_label: &'static str,
    pub about_label: &'static str,
    pub about_body: &'static str,
    pub technologies_label: &'static str,
    pub chat_label: &'static str,
    pub rights_notice: &'static str,
}

impl StringBundle {
    /// Returns the static bundle for `locale`.
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static StringBundle {
        match locale {
            Locale::Pt => &PT,
            Locale::En => &EN,
        }
    }

    #[must_use]
    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::Role => self.role,
            TextKey::ContactLabel => self.contact_label,
            TextKey::LearnMoreLabel => self.learn_more_label,
            TextKey::AboutLabel => self.about_label,
            TextKey::AboutBody => self.about_body,
            TextKey::TechnologiesLabel => self.technologies_label,
            TextKey::ChatLabel => self.chat_label,
            TextKey::RightsNotice => self.rights_notice,
        }
    }
}

static PT: StringBundle = StringBundle {
    role: "Desenvolvedor Full Stack & Web Designer",
    contact_label: "Entre em Contato",
    learn_more_label: "Saiba Mais",
    about_label: "Sobre Mim",
    about_body: "Sou um desenvolvedor de sistemas apaixonado por criar experiências digitais \
                 excepcionais. Com mais de 5 anos de experiência em desenvolvimento web, combino \
                 habilidades técnicas com um olhar aguçado para design, entregando soluções que \
                 não só funcionam perfeitamente, mas também impressionam visualmente.",
    technologies_label: "Tecnologias",
    chat_label: "Vamos Conversar?",
    rights_notice: "Todos os direitos reservados.",
};

static EN: StringBundle = StringBundle {
    role: "Full Stack Developer & Web Designer",
    contact_label: "Contact Me",
    learn_more_label: "Learn More",
    about_label: "About Me",
    about_body: "I am a systems developer passionate about building exceptional digital \
                 experiences. With more than 5 years of web development experience, I combine \
                 technical skills with a keen eye for design, delivering solutions that not only \
                 work flawlessly but also look impressive.",
    technologies_label: "Technologies",
    chat_label: "Let's Talk?",
    rights_notice: "All rights reserved.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_every_key_non_empty() {
        for locale in Locale::ALL {
            let bundle = StringBundle::for_locale(locale);
            for key in TextKey::ALL {
                assert!(
                    !bundle.get(key).trim().is_empty(),
                    "{key:?} is empty for {locale:?}"
                );
            }
        }
    }

    #[test]
    fn contact_label_matches_hero_copy() {
        assert_eq!(
            StringBundle::for_locale(Locale::Pt).get(TextKey::ContactLabel),
            "Entre em Contato"
        );
        assert_eq!(
            StringBundle::for_locale(Locale::En).get(TextKey::ContactLabel),
            "Contact Me"
        );
    }

    #[test]
    fn bundles_are_actually_translated() {
        let pt = StringBundle::for_locale(Locale::Pt);
        let en = StringBundle::for_locale(Locale::En);
        for key in TextKey::ALL {
            assert_ne!(pt.get(key), en.get(key), "{key:?} is identical in both locales");
        }
    }

    #[test]
    fn about_body_continuation_lines_are_joined_with_single_spaces() {
        for locale in Locale::ALL {
            let body = StringBundle::for_locale(locale).about_body;
            assert!(!body.contains("  "));
            assert!(!body.contains('\n'));
        }
    }
}
