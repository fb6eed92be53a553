// SPDX-License-Identifier: MPL-2.0
//! Technologies section: heading and a grid of technology cards.

use super::{heading, section, Message, ViewContext, BOLD};
use crate::content::{self, TechCard};
use crate::locale::TextKey;
use crate::page::{self, metrics};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, faded};
use iced::widget::{container, text, Column, Row, Space};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.layout().tech_columns().max(1);

    let mut grid = Column::new().spacing(metrics::GRID_GAP);
    for chunk in content::TECH_CARDS.chunks(columns) {
        let mut row = Row::new().spacing(metrics::GRID_GAP);
        for card in chunk {
            row = row.push(card_view(ctx, card));
        }
        for _ in chunk.len()..columns {
            row = row.push(
                Space::new()
                    .width(Length::Fill)
                    .height(metrics::TECH_CARD_HEIGHT),
            );
        }
        grid = grid.push(row);
    }

    let column = Column::new()
        .spacing(metrics::HEADING_GAP)
        .push(heading(
            ctx,
            content::TECHNOLOGIES_HEADING,
            ctx.controller.text(TextKey::TechnologiesLabel),
        ))
        .push(grid);

    section(column, ctx.region_height(page::TECHNOLOGIES)).into()
}

fn card_view<'a>(ctx: &ViewContext<'a>, card: &'static TechCard) -> Element<'a, Message> {
    let alpha = ctx.alpha(card.id);
    let colors = ctx.colors;

    let techs = card.techs.iter().fold(
        Column::new().spacing(spacing::XS),
        |list, tech| {
            list.push(
                text(format!("• {tech}"))
                    .size(typography::BODY)
                    .color(faded(colors.text_secondary, alpha)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::MD)
        .push(
            text(card.title)
                .size(typography::CARD_TITLE)
                .font(BOLD)
                .color(faded(colors.accent, alpha)),
        )
        .push(techs);

    container(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(metrics::TECH_CARD_HEIGHT)
        .style(styles::container::card(colors, alpha))
        .into()
}
