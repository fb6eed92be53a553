// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(%err, "window icon svg could not be parsed");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

/// Window icon for the title bar and task switcher.
pub fn load_window_icon() -> Option<Icon> {
    let data = rasterize(ICON_SIZE)?;
    icon::from_rgba(data, ICON_SIZE, ICON_SIZE).ok()
}
