// SPDX-License-Identifier: MPL-2.0
//! Exchange-rate controls: current rate display, manual entry, refresh.

use crate::i18n::I18n;
use crate::rate::RateState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Row, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    InputSubmitted,
    Refresh,
}

pub fn view<'a>(ctx: ViewContext<'a>, rate: &RateState, input: &'a str) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("rate-label")).size(typography::BODY);

    // Passive indicator while the rate is still absent.
    let current = match rate.current() {
        Some(rate) => format!("{rate:.2}"),
        None => ctx.i18n.tr("rate-absent"),
    };
    let current_text = Text::new(current).size(typography::BODY_LG);

    let placeholder = ctx.i18n.tr("rate-input-placeholder");
    let rate_input = text_input(&placeholder, input)
        .on_input(Message::InputChanged)
        .on_submit(Message::InputSubmitted)
        .padding(6)
        .size(16)
        .width(Length::Fixed(sizing::RATE_INPUT_WIDTH));

    let refresh_button = button(Text::new(ctx.i18n.tr("rate-refresh-button")))
        .on_press(Message::Refresh)
        .padding([6, 12]);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(current_text)
        .push(rate_input)
        .push(refresh_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_view_renders_without_rate() {
        let i18n = I18n::default();
        let rate = RateState::default();
        let _element = view(ViewContext { i18n: &i18n }, &rate, "");
    }

    #[test]
    fn controls_view_renders_with_rate() {
        let i18n = I18n::default();
        let mut rate = RateState::default();
        rate.set_manual("45000");
        let _element = view(ViewContext { i18n: &i18n }, &rate, "45000");
    }
}
