// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page widgets.
//!
//! Styles that take an `alpha` multiply every color by it so a block can fade
//! in as a whole while it is being revealed.

use iced::Color;

pub mod button;
pub mod container;

/// Scales the alpha channel of `color` by `alpha` (clamped to `0.0..=1.0`).
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn faded_scales_existing_alpha() {
        let half = Color::from_rgba(1.0, 0.0, 0.0, 0.5);
        assert_abs_diff_eq!(faded(half, 0.5).a, 0.25);
        assert_abs_diff_eq!(faded(Color::WHITE, 1.0).a, 1.0);
    }

    #[test]
    fn faded_clamps_out_of_range_alpha() {
        assert_abs_diff_eq!(faded(Color::WHITE, -1.0).a, 0.0);
        assert_abs_diff_eq!(faded(Color::WHITE, 3.0).a, 1.0);
    }
}
