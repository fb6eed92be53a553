// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Scroll**: Smooth-scroll animation duration
//! - **Reveal**: Intersection threshold and fade-in duration

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Default smooth-scroll animation duration (in milliseconds).
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 600;

/// Maximum smooth-scroll animation duration (in milliseconds).
pub const MAX_SCROLL_DURATION_MS: u32 = 3_000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of an element's area that must be inside the viewport before it
/// is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.5;

/// Smallest accepted reveal threshold. Zero would reveal elements that merely
/// touch the viewport edge.
pub const MIN_REVEAL_THRESHOLD: f32 = 0.05;

/// Largest accepted reveal threshold (fully visible).
pub const MAX_REVEAL_THRESHOLD: f32 = 1.0;

/// Default fade-in duration once an element is revealed (in milliseconds).
pub const DEFAULT_REVEAL_FADE_MS: u32 = 700;

/// Maximum fade-in duration (in milliseconds).
pub const MAX_REVEAL_FADE_MS: u32 = 5_000;

const _: () = {
    assert!(DEFAULT_SCROLL_DURATION_MS <= MAX_SCROLL_DURATION_MS);
    assert!(DEFAULT_REVEAL_FADE_MS <= MAX_REVEAL_FADE_MS);
    assert!(MIN_REVEAL_THRESHOLD > 0.0);
    assert!(DEFAULT_REVEAL_THRESHOLD >= MIN_REVEAL_THRESHOLD);
    assert!(DEFAULT_REVEAL_THRESHOLD <= MAX_REVEAL_THRESHOLD);
};
