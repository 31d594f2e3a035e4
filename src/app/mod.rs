// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the domain (catalog, selection, rate)
//! with the UI components and translates messages into side effects like
//! the clipboard write or the rate refresh. Policy decisions (startup
//! ordering, toast severity per failure, the copy-feedback ambiguity) live
//! here so user-facing behavior is easy to audit in one place.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::{catalog, Catalog, ExponentRange, Millisats, Selection, Toggle};
use crate::i18n::I18n;
use crate::notes::{self, NoteImageCache};
use crate::rate::{self, RateState};
use crate::ui::{denomination_grid, export_bar, notifications, rate_controls};
use iced::{clipboard, time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state bridging the picker domain, localization,
/// and the toast system.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    selection: Selection,
    rate: RateState,
    /// Raw text of the manual rate field.
    rate_input: String,
    rate_endpoint: String,
    fiat_symbol: String,
    assets_dir: PathBuf,
    note_images: NoteImageCache,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection)
            .field("rate", &self.rate)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 580;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: Catalog::default(),
            selection: Selection::default(),
            rate: RateState::default(),
            rate_input: String::new(),
            rate_endpoint: rate::DEFAULT_ENDPOINT.to_string(),
            fiat_symbol: config::DEFAULT_FIAT_SYMBOL.to_string(),
            assets_dir: PathBuf::from(config::DEFAULT_ASSETS_DIR),
            note_images: NoteImageCache::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup task.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)).unwrap_or_else(|err| {
                eprintln!("Failed to read {path}: {err}");
                Config::default()
            }),
            None => config::load(),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let range = ExponentRange::new(
            config.min_exponent.unwrap_or(catalog::DEFAULT_MIN_EXPONENT),
            config.max_exponent.unwrap_or(catalog::DEFAULT_MAX_EXPONENT),
        );
        let capacity = config
            .selection_capacity
            .unwrap_or(config::DEFAULT_SELECTION_CAPACITY);
        let assets_dir = flags
            .assets_dir
            .or(config.assets_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_ASSETS_DIR));

        let app = App {
            i18n,
            catalog: Catalog::generate(range),
            selection: Selection::new(capacity),
            rate_endpoint: config
                .rate_endpoint
                .unwrap_or_else(|| rate::DEFAULT_ENDPOINT.to_string()),
            fiat_symbol: config
                .fiat_symbol
                .unwrap_or_else(|| config::DEFAULT_FIAT_SYMBOL.to_string()),
            assets_dir,
            ..Self::default()
        };

        // The catalog is generated synchronously above, so the first paint
        // shows it while the startup task is still in flight.
        let task = Task::perform(
            startup(app.assets_dir.clone(), app.rate_endpoint.clone(), capacity),
            |(images, rate)| Message::Started { images, rate },
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Ticks only run while a toast is on screen.
        if self.notifications.has_notifications() {
            time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Started { images, rate } => {
                self.note_images = images;
                self.rate.apply_fetched(rate);
                Task::none()
            }
            Message::Grid(denomination_grid::Message::Toggled(value)) => self.handle_toggle(value),
            Message::Rate(rate_message) => self.handle_rate_message(rate_message),
            Message::Export(export_bar::Message::Copy) => self.handle_copy(),
            Message::RateFetched(rate) => {
                self.rate.apply_fetched(rate);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_toggle(&mut self, value: Millisats) -> Task<Message> {
        // Only catalog members may enter the selection.
        if !self.catalog.contains(value) {
            return Task::none();
        }
        if self.selection.toggle(value) == Toggle::LimitReached {
            self.notifications.push(
                notifications::Notification::warning("notification-selection-limit")
                    .with_arg("max", self.selection.capacity().to_string()),
            );
        }
        Task::none()
    }

    fn handle_rate_message(&mut self, message: rate_controls::Message) -> Task<Message> {
        match message {
            rate_controls::Message::InputChanged(input) => {
                self.rate_input = input;
                Task::none()
            }
            rate_controls::Message::InputSubmitted => {
                // An invalid entry is ignored without feedback; the rate
                // display simply does not change.
                let _ = self.rate.set_manual(&self.rate_input);
                Task::none()
            }
            rate_controls::Message::Refresh => {
                // No cancellation support: overlapping refreshes race and
                // the last resolved response wins.
                let endpoint = self.rate_endpoint.clone();
                Task::perform(
                    async move { rate::fetch_remote(&endpoint).await },
                    Message::RateFetched,
                )
            }
        }
    }

    fn handle_copy(&mut self) -> Task<Message> {
        match self.selection.export() {
            Some(text) => {
                // The success toast is optimistic: the clipboard task gives
                // no completion signal, so feedback is shown when the write
                // is dispatched.
                self.notifications
                    .push(notifications::Notification::success(
                        "notification-copy-success",
                    ));
                clipboard::write(text)
            }
            None => {
                self.notifications
                    .push(notifications::Notification::warning(
                        "notification-copy-empty",
                    ));
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            selection: &self.selection,
            rate: &self.rate,
            rate_input: &self.rate_input,
            fiat_symbol: &self.fiat_symbol,
            assets_dir: &self.assets_dir,
            note_images: &self.note_images,
            notifications: &self.notifications,
        })
    }
}

/// Runs the startup sequence: image preloads complete (or fail fast)
/// before the rate fetch starts, so the first populated frame reflects
/// the note previews while the rate may still be absent.
async fn startup(
    assets_dir: PathBuf,
    endpoint: String,
    capacity: usize,
) -> (NoteImageCache, Option<f64>) {
    let (images, preload_error) = notes::preload(assets_dir, capacity).await;
    if let Some(err) = preload_error {
        eprintln!("Note image preload incomplete: {err}");
    }
    let rate = rate::fetch_remote(&endpoint).await;
    (images, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn toggle(app: &mut App, value: u64) {
        let _ = app.update(Message::Grid(denomination_grid::Message::Toggled(
            Millisats::new(value),
        )));
    }

    #[test]
    fn default_app_starts_empty_and_rateless() {
        let app = App::default();
        assert!(app.selection.is_empty());
        assert_eq!(app.rate.current(), None);
        assert!(app.note_images.is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_comes_from_localization() {
        let app = App::default();
        assert_eq!(app.title(), "SatNotes");
    }

    #[test]
    fn toggling_a_catalog_value_selects_it() {
        let mut app = App::default();
        toggle(&mut app, 1 << 12);
        assert_eq!(app.selection.len(), 1);

        toggle(&mut app, 1 << 12);
        assert!(app.selection.is_empty());
    }

    #[test]
    fn toggling_an_unknown_value_is_ignored() {
        let mut app = App::default();
        toggle(&mut app, 12345);
        assert!(app.selection.is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn fifth_toggle_warns_and_leaves_selection_unchanged() {
        let mut app = App::default();
        for exponent in 10..14 {
            toggle(&mut app, 1 << exponent);
        }
        assert_eq!(app.selection.len(), 4);
        let total_before = app.selection.total();

        toggle(&mut app, 1 << 20);

        assert_eq!(app.selection.len(), 4);
        assert_eq!(app.selection.total(), total_before);
        assert!(
            app.notifications.has_notifications(),
            "a warning toast should be shown for the rejected toggle"
        );
    }

    #[test]
    fn manual_rate_entry_updates_rate() {
        let mut app = App::default();
        let _ = app.update(Message::Rate(rate_controls::Message::InputChanged(
            "45000".into(),
        )));
        let _ = app.update(Message::Rate(rate_controls::Message::InputSubmitted));
        assert_eq!(app.rate.current(), Some(45_000.0));
    }

    #[test]
    fn invalid_manual_rate_is_silently_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Rate(rate_controls::Message::InputChanged(
            "45000".into(),
        )));
        let _ = app.update(Message::Rate(rate_controls::Message::InputSubmitted));

        let _ = app.update(Message::Rate(rate_controls::Message::InputChanged(
            "abc".into(),
        )));
        let _ = app.update(Message::Rate(rate_controls::Message::InputSubmitted));

        assert_eq!(app.rate.current(), Some(45_000.0));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn fetched_rate_arrives_via_message() {
        let mut app = App::default();
        let _ = app.update(Message::RateFetched(Some(61_000.0)));
        assert_eq!(app.rate.current(), Some(61_000.0));

        // A failed refresh keeps the prior value.
        let _ = app.update(Message::RateFetched(None));
        assert_eq!(app.rate.current(), Some(61_000.0));
    }

    #[test]
    fn startup_result_populates_cache_and_rate() {
        let mut app = App::default();
        let mut images = NoteImageCache::new();
        images.insert(0, Handle::from_bytes(b"img".to_vec()));

        let _ = app.update(Message::Started {
            images,
            rate: Some(50_000.0),
        });

        assert_eq!(app.note_images.len(), 1);
        assert_eq!(app.rate.current(), Some(50_000.0));
    }

    #[test]
    fn startup_without_rate_leaves_it_absent() {
        let mut app = App::default();
        let _ = app.update(Message::Started {
            images: NoteImageCache::new(),
            rate: None,
        });
        assert_eq!(app.rate.current(), None);
    }

    #[test]
    fn copy_with_empty_selection_warns() {
        let mut app = App::default();
        let _ = app.update(Message::Export(export_bar::Message::Copy));
        assert!(app.notifications.has_notifications());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-copy-empty"));
    }

    #[test]
    fn copy_with_selection_shows_success() {
        let mut app = App::default();
        toggle(&mut app, 1 << 10);
        let _ = app.update(Message::Export(export_bar::Message::Copy));
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-copy-success"));
    }

    #[test]
    fn notification_dismiss_message_removes_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Export(export_bar::Message::Copy));
        let id = app
            .notifications
            .visible()
            .next()
            .expect("toast should exist")
            .id();

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        assert!(!app.notifications.has_notifications());
    }
}
