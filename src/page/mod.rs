// SPDX-License-Identifier: MPL-2.0
//! Page geometry: where each section and each revealable block sits.
//!
//! Iced does not expose widget bounds after layout, so the page is laid out
//! from the same [`metrics`] the view uses for its fixed-height containers.
//! [`PageLayout`] is therefore the "rendered document" that in-page
//! navigation and the reveal observer query.

pub mod metrics;

use crate::content::{self, ElementId};
use iced::{Point, Rectangle, Size};

/// Identifier of the hero banner region.
pub const HERO: &str = "hero";
/// Identifier of the about region.
pub const ABOUT: &str = "about";
/// Identifier of the technologies region.
pub const TECHNOLOGIES: &str = "technologies";
/// Identifier of the contact region.
pub const CONTACT: &str = "contact";
/// Identifier of the footer region.
pub const FOOTER: &str = "footer";

/// A named, scrollable region of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub bounds: Rectangle,
}

/// A block that fades in once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    pub id: ElementId,
    pub bounds: Rectangle,
}

/// Page geometry for one viewport size, in page coordinates (origin at the
/// top-left of the scrollable content).
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    content_x: f32,
    content_width: f32,
    tech_columns: usize,
    contact_rows: usize,
    regions: Vec<Region>,
    targets: Vec<RevealTarget>,
    height: f32,
}

impl PageLayout {
    /// Lays out the page for a viewport of `viewport` size.
    #[must_use]
    pub fn compute(viewport: Size) -> Self {
        let viewport = Size::new(viewport.width.max(0.0), viewport.height.max(0.0));
        let content_width = (viewport.width - 2.0 * metrics::PAGE_PADDING_X)
            .clamp(0.0, metrics::CONTENT_MAX_WIDTH);
        let content_x = ((viewport.width - content_width) / 2.0).max(0.0);
        let wide = viewport.width >= metrics::MD_BREAKPOINT;
        let tech_columns = if wide { 3 } else { 2 };
        let contact_rows = if wide { 1 } else { 2 };

        let mut builder = Builder {
            content_x,
            content_width,
            cursor: 0.0,
            regions: Vec::new(),
            targets: Vec::new(),
        };

        builder.region(HERO, viewport.height.max(metrics::HERO_MIN_HEIGHT));

        // About: heading + card.
        let top = builder.cursor + metrics::SECTION_PADDING_Y;
        builder.block(content::ABOUT_HEADING, top, metrics::HEADING_HEIGHT);
        let body_top = top + metrics::HEADING_HEIGHT + metrics::ABOUT_HEADING_GAP;
        builder.block(content::ABOUT_BODY, body_top, metrics::ABOUT_CARD_HEIGHT);
        builder.region(ABOUT, about_height());

        // Technologies: heading + card grid.
        let top = builder.cursor + metrics::SECTION_PADDING_Y;
        builder.block(content::TECHNOLOGIES_HEADING, top, metrics::HEADING_HEIGHT);
        let grid_top = top + metrics::HEADING_HEIGHT + metrics::HEADING_GAP;
        let card_width = column_width(content_width, tech_columns);
        for (index, card) in content::TECH_CARDS.iter().enumerate() {
            let row = index / tech_columns;
            let column = index % tech_columns;
            let bounds = Rectangle::new(
                Point::new(
                    content_x + column as f32 * (card_width + metrics::GRID_GAP),
                    grid_top + row as f32 * (metrics::TECH_CARD_HEIGHT + metrics::GRID_GAP),
                ),
                Size::new(card_width, metrics::TECH_CARD_HEIGHT),
            );
            builder.targets.push(RevealTarget { id: card.id, bounds });
        }
        builder.region(TECHNOLOGIES, technologies_height(tech_columns));

        // Contact: heading + link rows.
        let top = builder.cursor + metrics::SECTION_PADDING_Y;
        builder.block(content::CONTACT_HEADING, top, metrics::HEADING_HEIGHT);
        let links_top = top + metrics::HEADING_HEIGHT + metrics::HEADING_GAP;
        let links_height = stacked_height(
            contact_rows,
            metrics::CONTACT_ROW_HEIGHT,
            metrics::CONTACT_ROW_GAP,
        );
        builder.block(content::CONTACT_LINKS, links_top, links_height);
        builder.region(CONTACT, contact_height(contact_rows));

        builder.region(FOOTER, metrics::FOOTER_HEIGHT);

        Self {
            viewport,
            content_x,
            content_width,
            tech_columns,
            contact_rows,
            height: builder.cursor,
            regions: builder.regions,
            targets: builder.targets,
        }
    }

    /// Looks up a region by identifier.
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Bounds of a revealable block.
    #[must_use]
    pub fn target(&self, id: ElementId) -> Option<Rectangle> {
        self.targets
            .iter()
            .find(|target| target.id == id)
            .map(|target| target.bounds)
    }

    #[must_use]
    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    /// Viewport size this layout was computed for.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Total scrollable content height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Largest vertical scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.height - self.viewport.height).max(0.0)
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[must_use]
    pub fn content_x(&self) -> f32 {
        self.content_x
    }

    #[must_use]
    pub fn tech_columns(&self) -> usize {
        self.tech_columns
    }

    #[must_use]
    pub fn contact_rows(&self) -> usize {
        self.contact_rows
    }
}

struct Builder {
    content_x: f32,
    content_width: f32,
    cursor: f32,
    regions: Vec<Region>,
    targets: Vec<RevealTarget>,
}

impl Builder {
    /// Appends a full-width region below the previous one.
    fn region(&mut self, id: &'static str, height: f32) {
        let width = self.content_width + 2.0 * self.content_x;
        let bounds = Rectangle::new(Point::new(0.0, self.cursor), Size::new(width, height));
        self.regions.push(Region { id, bounds });
        self.cursor += height;
    }

    /// Adds a content-width revealable block at `top`.
    fn block(&mut self, id: ElementId, top: f32, height: f32) {
        let bounds = Rectangle::new(
            Point::new(self.content_x, top),
            Size::new(self.content_width, height),
        );
        self.targets.push(RevealTarget { id, bounds });
    }
}

fn stacked_height(count: usize, item: f32, gap: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * item + (count - 1) as f32 * gap
}

fn column_width(content_width: f32, columns: usize) -> f32 {
    let gaps = (columns.saturating_sub(1)) as f32 * metrics::GRID_GAP;
    ((content_width - gaps) / columns.max(1) as f32).max(0.0)
}

/// Height of the about section.
#[must_use]
pub fn about_height() -> f32 {
    2.0 * metrics::SECTION_PADDING_Y
        + metrics::HEADING_HEIGHT
        + metrics::ABOUT_HEADING_GAP
        + metrics::ABOUT_CARD_HEIGHT
}

/// Height of the technologies section for a grid of `columns` columns.
#[must_use]
pub fn technologies_height(columns: usize) -> f32 {
    let rows = content::TECH_CARDS.len().div_ceil(columns.max(1));
    2.0 * metrics::SECTION_PADDING_Y
        + metrics::HEADING_HEIGHT
        + metrics::HEADING_GAP
        + stacked_height(rows, metrics::TECH_CARD_HEIGHT, metrics::GRID_GAP)
}

/// Height of the contact section when its links wrap onto `rows` rows.
#[must_use]
pub fn contact_height(rows: usize) -> f32 {
    2.0 * metrics::SECTION_PADDING_Y
        + metrics::HEADING_HEIGHT
        + metrics::HEADING_GAP
        + stacked_height(rows, metrics::CONTACT_ROW_HEIGHT, metrics::CONTACT_ROW_GAP)
}
