// SPDX-License-Identifier: MPL-2.0
//! Hero banner with the owner's name, role and the two call-to-action buttons.

use super::{Message, ViewContext, BOLD};
use crate::content::OWNER_NAME;
use crate::locale::TextKey;
use crate::page::{self, metrics};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length, Padding};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller = ctx.controller;
    let colors = ctx.colors;
    let wide = ctx.layout().viewport().width >= metrics::MD_BREAKPOINT;

    let name = text(OWNER_NAME)
        .size(if wide {
            typography::DISPLAY_LG
        } else {
            typography::DISPLAY_MD
        })
        .font(BOLD)
        .color(colors.brand_start);

    let role = text(controller.text(TextKey::Role))
        .size(typography::LEAD)
        .color(colors.text_secondary);

    let padding = Padding::from([sizing::BUTTON_PADDING_Y, sizing::BUTTON_PADDING_X]);
    let contact = button(text(controller.text(TextKey::ContactLabel)).font(BOLD))
        .padding(padding)
        .style(styles::button::primary(colors, 1.0))
        .on_press(Message::NavigateTo(page::CONTACT));
    let about = button(text(controller.text(TextKey::LearnMoreLabel)).font(BOLD))
        .padding(padding)
        .style(styles::button::outline(colors, 1.0))
        .on_press(Message::NavigateTo(page::ABOUT));

    let content = Column::new()
        .align_x(Alignment::Center)
        .spacing(spacing::LG)
        .push(name)
        .push(role)
        .push(Row::new().spacing(spacing::MD).push(contact).push(about));

    container(content)
        .center_x(Length::Fill)
        .center_y(ctx.region_height(page::HERO))
        .padding(Padding::from([0.0, metrics::PAGE_PADDING_X]))
        .into()
}
