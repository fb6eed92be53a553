// SPDX-License-Identifier: MPL-2.0
//! Language toggle pinned to the top-right corner.

use super::{Message, ViewContext};
use crate::locale::Locale;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Row};
use iced::{Element, Length};

/// Render the flag buttons, one per locale.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.controller.current_locale();

    let flags = Locale::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, locale| {
            row.push(
                button(icons::flag(locale))
                    .padding(spacing::XXS)
                    .style(styles::button::flag(ctx.colors, locale == current))
                    .on_press(Message::SetLocale(locale)),
            )
        },
    );

    let bar = container(flags)
        .padding(spacing::XS)
        .style(styles::container::toggle_bar(ctx.colors));

    container(bar)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD)
        .into()
}
