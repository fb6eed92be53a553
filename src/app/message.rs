// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::portfolio;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{window, Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction on the page (navigation, language toggle, contact links).
    Page(portfolio::Message),
    /// The page scrollable moved or was resized.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// The main window was opened with the given inner size.
    WindowOpened(window::Id, Size),
    /// The main window was resized.
    WindowResized(Size),
    /// Animation frame while scrolling or fading.
    Frame(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
