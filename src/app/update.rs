// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers run synchronously inside `App::update`, so a click is fully
//! applied to the controller before the next scroll report is processed.

use super::view::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::controller::PageController;
use crate::ui::portfolio;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Rectangle, Size, Task};
use std::time::Instant;

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub controller: &'a mut PageController,
    pub window_id: &'a mut Option<window::Id>,
}

/// Handles an interaction on the page.
pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        portfolio::Message::NavigateTo(section) => {
            if ctx.controller.navigate_to(section, now) {
                scroll_frame(ctx, now)
            } else {
                Task::none()
            }
        }
        portfolio::Message::SetLocale(locale) => {
            ctx.controller.set_locale(locale);
            Task::none()
        }
        portfolio::Message::CopyLink(uri) => {
            tracing::info!(uri, "contact link copied to clipboard");
            iced::clipboard::write(uri.to_string())
        }
    }
}

/// Advances the scroll animation and moves the scrollable accordingly.
pub fn scroll_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    match ctx.controller.on_frame(now) {
        Some(y) => operation::scroll_to(Id::new(PAGE_SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y }),
        None => Task::none(),
    }
}

/// Feeds a scroll report from the page scrollable to the reveal observer.
pub fn handle_viewport_changed(
    ctx: &mut UpdateContext<'_>,
    bounds: Rectangle,
    offset: AbsoluteOffset,
    now: Instant,
) {
    let revealed = ctx.controller.on_viewport_changed(bounds.size(), offset.y, now);
    if !revealed.is_empty() {
        tracing::debug!(count = revealed.len(), offset = offset.y, "blocks revealed");
    }
}

/// Records the main window and lays the page out for its size.
pub fn handle_window_opened(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    size: Size,
    now: Instant,
) {
    *ctx.window_id = Some(id);
    ctx.controller.on_window_resized(size, now);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size, now: Instant) {
    ctx.controller.on_window_resized(size, now);
}

/// Releases the reveal watcher, then closes the window.
pub fn handle_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
) -> Task<Message> {
    ctx.controller.deactivate();
    tracing::info!("page deactivated, closing window");
    window::close(id)
}
