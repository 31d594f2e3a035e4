// SPDX-License-Identifier: MPL-2.0
//! `satnotes` is a small denomination-picker widget built with the Iced GUI
//! framework.
//!
//! It lets the user stack up to four QR-coded satnotes in power-of-two
//! millisatoshi denominations, shows the running total alongside an optional
//! fiat conversion, and previews how many printed notes the stack needs.

#![doc(html_root_url = "https://docs.rs/satnotes/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod notes;
pub mod rate;
pub mod ui;
