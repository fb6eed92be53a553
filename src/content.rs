// SPDX-License-Identifier: MPL-2.0
//! Static page content that does not depend on the locale.
//!
//! Everything here is compile-time data: the owner's name, the technology
//! cards, the contact endpoints and the identifiers of the blocks that fade
//! in on scroll. Translated strings live in [`crate::locale::bundle`].

use std::fmt;

/// Name shown in the hero banner and the footer.
pub const OWNER_NAME: &str = "João Silva";

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Identifies a block that fades in once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    section: &'static str,
    name: &'static str,
}

impl ElementId {
    #[must_use]
    pub const fn new(section: &'static str, name: &'static str) -> Self {
        Self { section, name }
    }

    /// Identifier of the page region this block belongs to.
    #[must_use]
    pub fn section(self) -> &'static str {
        self.section
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.name)
    }
}

pub const ABOUT_HEADING: ElementId = ElementId::new("about", "heading");
pub const ABOUT_BODY: ElementId = ElementId::new("about", "body");
pub const TECHNOLOGIES_HEADING: ElementId = ElementId::new("technologies", "heading");
pub const CONTACT_HEADING: ElementId = ElementId::new("contact", "heading");
pub const CONTACT_LINKS: ElementId = ElementId::new("contact", "links");

/// A titled list of technologies.
#[derive(Debug)]
pub struct TechCard {
    pub id: ElementId,
    pub title: &'static str,
    pub techs: &'static [&'static str],
}

pub static TECH_CARDS: [TechCard; 3] = [
    TechCard {
        id: ElementId::new("technologies", "front-end"),
        title: "Front-end",
        techs: &[
            "React.js",
            "Vue.js",
            "Angular.js",
            "HTML",
            "CSS",
            "Sass",
            "Bootstrap",
        ],
    },
    TechCard {
        id: ElementId::new("technologies", "back-end"),
        title: "Back-end",
        techs: &["PHP", "MySQL", "Oracle DB"],
    },
    TechCard {
        id: ElementId::new("technologies", "design"),
        title: "Design",
        techs: &["UI/UX Design", "Responsive Design", "Web Design"],
    },
];

/// Kind of outbound contact endpoint; drives the button color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    LinkedIn,
    WhatsApp,
    Email,
    GitHub,
}

/// An outbound contact link. The URI is rendered exactly as configured.
#[derive(Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub uri: &'static str,
}

pub static CONTACT_LINKS_TABLE: [ContactLink; 4] = [
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        uri: "https://linkedin.com/in/seuprofile",
    },
    ContactLink {
        kind: ContactKind::WhatsApp,
        label: "WhatsApp",
        uri: "https://wa.me/5511999999999",
    },
    ContactLink {
        kind: ContactKind::Email,
        label: "E-mail",
        uri: "mailto:seu@email.com",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        uri: "https://github.com/seuprofile",
    },
];

/// Every revealable block, in page order.
#[must_use]
pub fn revealable_elements() -> Vec<ElementId> {
    let mut ids = vec![ABOUT_HEADING, ABOUT_BODY, TECHNOLOGIES_HEADING];
    ids.extend(TECH_CARDS.iter().map(|card| card.id));
    ids.extend([CONTACT_HEADING, CONTACT_LINKS]);
    ids
}
