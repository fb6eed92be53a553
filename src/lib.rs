// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` renders a bilingual personal portfolio page with the Iced GUI
//! framework.
//!
//! The behavioral core is the [`controller::PageController`], which owns the
//! [`locale`] store, the smooth-scroll [`navigation`] and the one-shot
//! [`reveal`] observer, all operating on the geometry computed by [`page`].
//! Everything else renders static [`content`] through the [`ui`] layer.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod icon;
pub mod locale;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
