// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! the [`PageController`](crate::controller::PageController) and emit
//! messages, never mutating state themselves.
//!
//! - [`portfolio`] - The page sections and the language toggle
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded flag artwork

pub mod design_tokens;
pub mod icons;
pub mod portfolio;
pub mod styles;
pub mod theming;
