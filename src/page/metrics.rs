// SPDX-License-Identifier: MPL-2.0
//! Fixed section metrics shared by [`super::PageLayout`] and the view.
//!
//! The view sizes its containers with these values, so the computed layout
//! and the rendered page agree without measuring widgets.

/// Viewport width at which the page switches to its wide arrangement.
pub const MD_BREAKPOINT: f32 = 768.0;

/// Maximum width of the centered content column.
pub const CONTENT_MAX_WIDTH: f32 = 896.0;

/// Horizontal page padding on each side of the content column.
pub const PAGE_PADDING_X: f32 = 16.0;

/// Minimum hero height when the window is very short.
pub const HERO_MIN_HEIGHT: f32 = 480.0;

/// Vertical padding at the top and bottom of each content section.
pub const SECTION_PADDING_Y: f32 = 80.0;

/// Height reserved for a section heading.
pub const HEADING_HEIGHT: f32 = 48.0;

/// Gap between the about heading and its card.
pub const ABOUT_HEADING_GAP: f32 = 32.0;

/// Gap between a heading and its content in the other sections.
pub const HEADING_GAP: f32 = 48.0;

/// Height of the about card.
pub const ABOUT_CARD_HEIGHT: f32 = 240.0;

/// Height of a technology card (fits the longest list).
pub const TECH_CARD_HEIGHT: f32 = 320.0;

/// Gap between technology cards.
pub const GRID_GAP: f32 = 24.0;

/// Height of one row of contact buttons (label over URI).
pub const CONTACT_ROW_HEIGHT: f32 = 64.0;

/// Gap between wrapped rows of contact buttons.
pub const CONTACT_ROW_GAP: f32 = 24.0;

/// Footer height.
pub const FOOTER_HEIGHT: f32 = 72.0;

const _: () = {
    assert!(CONTENT_MAX_WIDTH < MD_BREAKPOINT * 2.0);
    assert!(HEADING_GAP >= ABOUT_HEADING_GAP);
    assert!(HERO_MIN_HEIGHT > 0.0);
};
