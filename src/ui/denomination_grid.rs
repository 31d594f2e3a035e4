// SPDX-License-Identifier: MPL-2.0
//! The toggle grid offering one button per catalog denomination.

use crate::domain::{Catalog, Millisats, Selection};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Buttons per row; 20 denominations render as a 4x5 grid.
const COLUMNS: usize = 5;

#[derive(Debug, Clone)]
pub enum Message {
    /// A denomination button was pressed.
    Toggled(Millisats),
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(
    ctx: ViewContext<'a>,
    catalog: &'a Catalog,
    selection: &'a Selection,
) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("picker-title")).size(typography::TITLE_MD);
    let hint = Text::new(ctx.i18n.tr("picker-hint")).size(typography::CAPTION);

    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in catalog.entries().chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for denomination in chunk {
            let base = button(Text::new(denomination.display.as_str()).size(typography::BODY))
                .on_press(Message::Toggled(denomination.value))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fixed(sizing::DENOMINATION_BUTTON_WIDTH));
            let styled = if selection.contains(denomination.value) {
                base.style(styles::button::selected)
            } else {
                base.style(styles::button::unselected)
            };
            row = row.push(styled);
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(hint)
        .push(grid)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_view_renders() {
        let i18n = I18n::default();
        let catalog = Catalog::default();
        let selection = Selection::default();
        let _element = view(ViewContext { i18n: &i18n }, &catalog, &selection);
    }
}
