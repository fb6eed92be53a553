// SPDX-License-Identifier: MPL-2.0
//! The portfolio page: hero banner, about, technologies, contact and footer.
//!
//! Every section is rendered at the exact height [`PageLayout`] assigns to
//! it, so the regions the controller scrolls to and the blocks it reveals
//! line up with what is on screen. Revealable blocks are drawn with the
//! opacity returned by [`PageController::reveal_progress`].
//!
//! [`PageLayout`]: crate::page::PageLayout

mod about;
mod contact;
mod footer;
mod hero;
mod technologies;
mod toggle;

pub use toggle::view as language_toggle;

use crate::content::ElementId;
use crate::controller::PageController;
use crate::locale::Locale;
use crate::page::{metrics, PageLayout};
use crate::ui::design_tokens::typography;
use crate::ui::styles::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, Column, Container};
use iced::{font, Element, Font, Length, Padding};
use std::time::Instant;

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub controller: &'a PageController,
    pub colors: &'a ColorScheme,
    /// Instant used to evaluate reveal fades.
    pub now: Instant,
}

impl ViewContext<'_> {
    fn layout(&self) -> &PageLayout {
        self.controller.layout()
    }

    /// Opacity of a revealable block.
    fn alpha(&self, id: ElementId) -> f32 {
        self.controller.reveal_progress(id, self.now)
    }

    fn region_height(&self, id: &str) -> f32 {
        self.layout()
            .region(id)
            .map_or(0.0, |region| region.bounds.height)
    }
}

/// Messages emitted by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Scroll to the named section.
    NavigateTo(&'static str),
    /// Switch the display language.
    SetLocale(Locale),
    /// Copy a contact URI to the clipboard.
    CopyLink(&'static str),
}

/// Render the full page, top to bottom.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(about::view(ctx))
        .push(technologies::view(ctx))
        .push(contact::view(ctx))
        .push(footer::view(ctx))
        .into()
}

pub(crate) const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Full-width section of fixed `height` whose content is centered and
/// capped at the page content width.
fn section<'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
) -> Container<'a, Message> {
    let inner = container(content).max_width(metrics::CONTENT_MAX_WIDTH);

    container(inner)
        .center_x(Length::Fill)
        .height(height)
        .padding(Padding::from([
            metrics::SECTION_PADDING_Y,
            metrics::PAGE_PADDING_X,
        ]))
}

/// Revealable section heading.
fn heading<'a>(ctx: &ViewContext<'a>, id: ElementId, label: &'a str) -> Element<'a, Message> {
    let alpha = ctx.alpha(id);

    container(
        text(label)
            .size(typography::HEADING)
            .font(BOLD)
            .color(faded(ctx.colors.text_primary, alpha))
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(metrics::HEADING_HEIGHT)
    .into()
}
