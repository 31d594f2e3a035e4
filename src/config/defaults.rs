// SPDX-License-Identifier: MPL-2.0
//! Default values applied when `settings.toml` leaves a field unset.

/// Maximum number of notes in a stack.
pub const DEFAULT_SELECTION_CAPACITY: usize = 4;

/// Currency symbol prefixed to fiat amounts.
pub const DEFAULT_FIAT_SYMBOL: &str = "$";

/// Directory holding the `note_NNNN.png` preview images, relative to the
/// working directory unless overridden.
pub const DEFAULT_ASSETS_DIR: &str = "assets/notes";
