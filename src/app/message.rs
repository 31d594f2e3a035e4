// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notes::NoteImageCache;
use crate::ui::denomination_grid;
use crate::ui::export_bar;
use crate::ui::notifications;
use crate::ui::rate_controls;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup task finished: the preloaded note images followed by the
    /// initial rate fetch, in that order.
    Started {
        images: NoteImageCache,
        rate: Option<f64>,
    },
    Grid(denomination_grid::Message),
    Rate(rate_controls::Message),
    Export(export_bar::Message),
    Notification(notifications::Message),
    /// Result of a user-triggered rate refresh.
    RateFetched(Option<f64>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing the note preview images.
    pub assets_dir: Option<String>,
    /// Optional path to a `settings.toml` to use instead of the default
    /// configuration directory.
    pub config_path: Option<String>,
}
