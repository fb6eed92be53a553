// SPDX-License-Identifier: MPL-2.0
//! Contact section: heading and one button per contact endpoint.

use super::{heading, section, Message, ViewContext, BOLD};
use crate::content::{self, ContactKind, ContactLink};
use crate::locale::TextKey;
use crate::page::{self, metrics};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles::{self, faded};
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Color, Element, Length};

/// Button color for a contact channel.
fn tint(kind: ContactKind) -> Color {
    match kind {
        ContactKind::LinkedIn => palette::LINKEDIN,
        ContactKind::WhatsApp => palette::WHATSAPP,
        ContactKind::Email => palette::RED_500,
        ContactKind::GitHub => palette::GRAY_700,
    }
}

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.alpha(content::CONTACT_LINKS);
    let rows = ctx.layout().contact_rows().max(1);
    let per_row = content::CONTACT_LINKS_TABLE.len().div_ceil(rows);

    let links = content::CONTACT_LINKS_TABLE.chunks(per_row).fold(
        Column::new().spacing(metrics::CONTACT_ROW_GAP),
        |column, chunk| {
            let row = chunk.iter().fold(
                Row::new().spacing(metrics::GRID_GAP),
                |row, link| row.push(link_button(link, alpha)),
            );
            column.push(row)
        },
    );

    let column = Column::new()
        .spacing(metrics::HEADING_GAP)
        .push(heading(
            ctx,
            content::CONTACT_HEADING,
            ctx.controller.text(TextKey::ChatLabel),
        ))
        .push(links);

    section(column, ctx.region_height(page::CONTACT))
        .style(styles::container::band(ctx.colors))
        .into()
}

/// Button caption: the channel label over its URI, shown verbatim.
fn link_lines(link: &'static ContactLink) -> [&'static str; 2] {
    [link.label, link.uri]
}

fn link_message(link: &'static ContactLink) -> Message {
    Message::CopyLink(link.uri)
}

fn link_button<'a>(link: &'static ContactLink, alpha: f32) -> Element<'a, Message> {
    let [label, uri] = link_lines(link);
    let caption = Column::new()
        .align_x(Alignment::Center)
        .spacing(spacing::XXS / 2.0)
        .push(text(label).font(BOLD))
        .push(
            text(uri)
                .size(typography::CAPTION)
                .color(faded(palette::WHITE, alpha * opacity::HOVER)),
        );

    button(container(caption).center(Length::Fill))
        .padding(spacing::XXS)
        .width(Length::Fill)
        .height(metrics::CONTACT_ROW_HEIGHT)
        .style(styles::button::contact(tint(link.kind), alpha))
        .on_press(link_message(link))
        .into()
}
