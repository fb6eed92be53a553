// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a fixed language toggle. Scroll reports from
//! the page scrollable feed the reveal observer.

use super::Message;
use crate::controller::PageController;
use crate::ui::portfolio;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Identifier of the page scrollable, target of navigation scroll tasks.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub controller: &'a PageController,
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

/// Renders the page with the language toggle on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_ctx = portfolio::ViewContext {
        controller: ctx.controller,
        colors: ctx.colors,
        now: ctx.now,
    };

    let page = Scrollable::new(portfolio::view(&page_ctx).map(Message::Page))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let toggle = portfolio::language_toggle(&page_ctx).map(Message::Page);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toggle);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors))
        .into()
}
