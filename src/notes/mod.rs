// SPDX-License-Identifier: MPL-2.0
//! Preview-image cache for the note stack.
//!
//! One image exists per possible selection count (`0..=N`), following the
//! fixed `note_<count:04>.png` naming convention. The cache is populated
//! once at startup and consulted best-effort afterwards: a missing entry
//! falls back to an on-demand path handle built from the same convention.

use crate::error::Error;
use futures_util::stream::{FuturesUnordered, StreamExt};
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const NOTE_IMAGE_PREFIX: &str = "note_";
const NOTE_IMAGE_EXT: &str = "png";

/// Builds the asset path for the preview image showing `count` notes.
#[must_use]
pub fn note_image_path(assets_dir: &Path, count: usize) -> PathBuf {
    assets_dir.join(format!("{NOTE_IMAGE_PREFIX}{count:04}.{NOTE_IMAGE_EXT}"))
}

/// Preloaded note images keyed by selection count. Entries are only ever
/// inserted, never invalidated.
#[derive(Debug, Clone, Default)]
pub struct NoteImageCache {
    entries: HashMap<usize, Handle>,
}

impl NoteImageCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the image for `count`.
    pub fn insert(&mut self, count: usize, handle: Handle) {
        self.entries.insert(count, handle);
    }

    /// Cached image for `count`, if the preload got that far.
    #[must_use]
    pub fn get(&self, count: usize) -> Option<Handle> {
        self.entries.get(&count).cloned()
    }

    /// Image for `count`, falling back to an on-demand path reference
    /// using the same naming convention when the key is missing.
    #[must_use]
    pub fn handle_for(&self, assets_dir: &Path, count: usize) -> Handle {
        self.get(count)
            .unwrap_or_else(|| Handle::from_path(note_image_path(assets_dir, count)))
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads the images for counts `0..=capacity` concurrently.
///
/// The aggregate fails fast: the first load error stops the wait and is
/// returned alongside the cache. Entries are inserted as each load
/// completes rather than atomically at the end, so everything that
/// finished before the failure stays usable.
pub async fn preload(assets_dir: PathBuf, capacity: usize) -> (NoteImageCache, Option<Error>) {
    let mut loads: FuturesUnordered<_> = (0..=capacity)
        .map(|count| {
            let path = note_image_path(&assets_dir, count);
            async move {
                let read_path = path.clone();
                let bytes = tokio::task::spawn_blocking(move || std::fs::read(&read_path))
                    .await
                    .unwrap_or_else(|err| Err(std::io::Error::other(err)))
                    .map_err(|err| Error::Asset(format!("{}: {err}", path.display())))?;
                Ok::<(usize, Handle), Error>((count, Handle::from_bytes(bytes)))
            }
        })
        .collect();

    let mut cache = NoteImageCache::new();
    let mut first_error = None;
    while let Some(result) = loads.next().await {
        match result {
            Ok((count, handle)) => cache.insert(count, handle),
            Err(err) => {
                first_error = Some(err);
                break;
            }
        }
    }
    (cache, first_error)
}
