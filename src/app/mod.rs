// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing collage and
//! the video archive.
//!
//! The `App` struct wires together the rotator, the audio session, and the
//! archive filter, and translates messages into the timer-driven side
//! effects described in the update module. Policy decisions (window
//! sizing, startup playback attempt) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::audio::{AudioSession, StreamPlayer, Volume};
use crate::config::{self, Config, BRAND_NAME};
use crate::domain::media::{ArchiveFilter, VideoItem};
use crate::rotator::Rotator;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    rotator: Rotator,
    audio: AudioSession<StreamPlayer>,
    videos: Vec<VideoItem>,
    archive_filter: ArchiveFilter,
    tick_interval: Duration,
    fade_delay: Duration,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("rotating", &self.rotator.should_rotate())
            .field("audio", &self.audio.state())
            .finish()
    }
}

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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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

impl App {
    /// Initializes application state from configuration and schedules the
    /// one-shot startup playback attempt.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(Path::new(path)).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let app = Self::from_config(&config, flags.stream_url);
        let delay = config.autoplay_delay();

        let startup = Task::perform(tokio::time::sleep(delay), |_| {
            Message::AutoplayDelayElapsed
        });

        (app, startup)
    }

    /// Builds the app from a resolved configuration. Separated from `new`
    /// so tests can drive the state machine without an Iced runtime.
    pub(crate) fn from_config(config: &Config, stream_url_override: Option<String>) -> Self {
        let rotator = Rotator::new(config.images());

        let stream_url = stream_url_override.unwrap_or_else(|| config.stream_url().to_string());
        let volume = Volume::new(config.volume());
        let audio = AudioSession::new(StreamPlayer::new(stream_url, volume), volume);

        Self {
            screen: Screen::Landing,
            rotator,
            audio,
            videos: config.videos(),
            archive_filter: ArchiveFilter::All,
            tick_interval: config.tick_interval(),
            fade_delay: config.fade_delay(),
        }
    }

    fn title(&self) -> String {
        BRAND_NAME.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::rotation(self)
    }
}
