// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::{money, Catalog, Selection};
use crate::i18n::I18n;
use crate::notes::NoteImageCache;
use crate::rate::RateState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{denomination_grid, export_bar, rate_controls};
use iced::widget::image::Image;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Row, Stack, Text},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub selection: &'a Selection,
    pub rate: &'a RateState,
    pub rate_input: &'a str,
    pub fiat_symbol: &'a str,
    pub assets_dir: &'a Path,
    pub note_images: &'a NoteImageCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the single picker screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = denomination_grid::view(
        denomination_grid::ViewContext { i18n: ctx.i18n },
        ctx.catalog,
        ctx.selection,
    )
    .map(Message::Grid);

    let preview_row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(view_note_preview(
            ctx.note_images,
            ctx.assets_dir,
            ctx.selection.len(),
        ))
        .push(view_total_panel(
            ctx.i18n,
            ctx.selection,
            ctx.rate,
            ctx.fiat_symbol,
        ));

    let rate_row = rate_controls::view(
        rate_controls::ViewContext { i18n: ctx.i18n },
        ctx.rate,
        ctx.rate_input,
    )
    .map(Message::Rate);

    let export_row = export_bar::view(export_bar::ViewContext { i18n: ctx.i18n }, ctx.selection)
        .map(Message::Export);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(grid)
        .push(preview_row)
        .push(rate_row)
        .push(export_row);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(toasts).into()
}

/// Preview image for the current note count; falls back to an on-demand
/// path reference when the preload did not reach this key.
fn view_note_preview<'a>(
    note_images: &'a NoteImageCache,
    assets_dir: &'a Path,
    count: usize,
) -> Element<'a, Message> {
    let handle = note_images.handle_for(assets_dir, count);
    Image::new(handle)
        .height(Length::Fixed(sizing::NOTE_PREVIEW_HEIGHT))
        .into()
}

fn view_total_panel<'a>(
    i18n: &'a I18n,
    selection: &'a Selection,
    rate: &'a RateState,
    fiat_symbol: &'a str,
) -> Element<'a, Message> {
    let total = selection.total();

    let label = Text::new(i18n.tr("total-label")).size(typography::BODY);
    let total_text = Text::new(money::format_amount(total)).size(typography::TITLE_MD);

    let fiat = match total.to_fiat(rate.current()) {
        Some(fiat) => money::format_fiat(fiat, fiat_symbol),
        None => i18n.tr("fiat-absent"),
    };
    let fiat_text = Text::new(fiat).size(typography::BODY);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(total_text)
        .push(fiat_text)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn view_renders_default_state() {
        let i18n = I18n::default();
        let catalog = Catalog::default();
        let selection = Selection::default();
        let rate = RateState::default();
        let note_images = NoteImageCache::new();
        let notifications = notifications::Manager::new();
        let assets_dir = PathBuf::from("assets/notes");

        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            selection: &selection,
            rate: &rate,
            rate_input: "",
            fiat_symbol: "$",
            assets_dir: &assets_dir,
            note_images: &note_images,
            notifications: &notifications,
        });
    }
}
