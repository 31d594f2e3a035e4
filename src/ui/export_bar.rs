// SPDX-License-Identifier: MPL-2.0
//! Machine-readable export of the selection with a copy-to-clipboard action.

use crate::domain::Selection;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Row, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Copy,
}

pub fn view<'a>(ctx: ViewContext<'a>, selection: &Selection) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("export-label")).size(typography::BODY);

    // The placeholder doubles as the explicit no-selection indicator.
    let placeholder = ctx.i18n.tr("export-placeholder");
    let value = selection.export().unwrap_or_default();
    let export_field = text_input(&placeholder, &value)
        .padding(6)
        .size(16)
        .width(Length::Fill);

    let copy_button = button(Text::new(ctx.i18n.tr("copy-button")))
        .on_press(Message::Copy)
        .padding([6, 12]);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(export_field)
        .push(copy_button);

    Column::new().spacing(spacing::XXS).push(label).push(row).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Millisats;

    #[test]
    fn export_bar_renders_empty_selection() {
        let i18n = I18n::default();
        let selection = Selection::default();
        let _element = view(ViewContext { i18n: &i18n }, &selection);
    }

    #[test]
    fn export_bar_renders_populated_selection() {
        let i18n = I18n::default();
        let mut selection = Selection::default();
        selection.toggle(Millisats::new(1 << 10));
        let _element = view(ViewContext { i18n: &i18n }, &selection);
    }
}
