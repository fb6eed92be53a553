// SPDX-License-Identifier: MPL-2.0
//! About section: heading and a single text card.

use super::{heading, section, Message, ViewContext};
use crate::content;
use crate::locale::TextKey;
use crate::page::{self, metrics};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, faded};
use iced::widget::{container, text, Column};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller = ctx.controller;
    let alpha = ctx.alpha(content::ABOUT_BODY);

    let body = container(
        text(controller.text(TextKey::AboutBody))
            .size(typography::BODY_LG)
            .line_height(1.6)
            .color(faded(ctx.colors.text_secondary, alpha)),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .height(metrics::ABOUT_CARD_HEIGHT)
    .style(styles::container::card(ctx.colors, alpha));

    let column = Column::new()
        .spacing(metrics::ABOUT_HEADING_GAP)
        .push(heading(
            ctx,
            content::ABOUT_HEADING,
            controller.text(TextKey::AboutLabel),
        ))
        .push(body);

    section(column, ctx.region_height(page::ABOUT))
        .style(styles::container::band(ctx.colors))
        .into()
}
