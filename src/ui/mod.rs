// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`denomination_grid`] - Toggleable buttons for every catalog entry
//! - [`rate_controls`] - Manual rate entry and the refresh action
//! - [`export_bar`] - Machine-readable export field with copy action
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] / [`design_tokens`] - Centralized styling constants

pub mod denomination_grid;
pub mod design_tokens;
pub mod export_bar;
pub mod notifications;
pub mod rate_controls;
pub mod styles;
