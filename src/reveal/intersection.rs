// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection math.

use iced::Rectangle;

/// Fraction of `element`'s area that lies inside `viewport`, in `[0, 1]`.
///
/// Degenerate elements (zero width or height) report `0.0` so they can never
/// be revealed by accident.
#[must_use]
pub fn intersection_ratio(element: Rectangle, viewport: Rectangle) -> f32 {
    let area = element.width * element.height;
    if area <= 0.0 || !area.is_finite() {
        return 0.0;
    }

    let left = element.x.max(viewport.x);
    let top = element.y.max(viewport.y);
    let right = (element.x + element.width).min(viewport.x + viewport.width);
    let bottom = (element.y + element.height).min(viewport.y + viewport.height);

    if right <= left || bottom <= top {
        return 0.0;
    }

    ((right - left) * (bottom - top) / area).clamp(0.0, 1.0)
}
