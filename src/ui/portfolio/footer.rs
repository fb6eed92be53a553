// SPDX-License-Identifier: MPL-2.0
//! Footer with the copyright line.

use super::{Message, ViewContext};
use crate::content::{COPYRIGHT_YEAR, OWNER_NAME};
use crate::locale::{StringBundle, TextKey};
use crate::page::metrics;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{container, text};
use iced::{Element, Length};

/// Copyright line in the bundle's language.
pub(super) fn copyright(bundle: &StringBundle) -> String {
    format!(
        "© {COPYRIGHT_YEAR} {OWNER_NAME}. {}",
        bundle.get(TextKey::RightsNotice)
    )
}

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    container(
        text(copyright(ctx.controller.bundle()))
            .size(typography::BODY)
            .color(ctx.colors.text_muted),
    )
    .center_x(Length::Fill)
    .center_y(metrics::FOOTER_HEIGHT)
    .style(styles::container::footer(ctx.colors))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn copyright_follows_locale() {
        assert_eq!(
            copyright(StringBundle::for_locale(Locale::Pt)),
            "© 2024 João Silva. Todos os direitos reservados."
        );
        assert_eq!(
            copyright(StringBundle::for_locale(Locale::En)),
            "© 2024 João Silva. All rights reserved."
        );
    }
}
