// SPDX-License-Identifier: MPL-2.0
//! Easing curves for scroll animation.

/// Cubic ease-in-out over `t` in `[0, 1]`. Inputs outside the range are
/// clamped.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
