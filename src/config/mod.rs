// SPDX-License-Identifier: MPL-2.0
//! Application configuration: loading and saving user preferences and the
//! media catalog from a `settings.toml` file.
//!
//! Every field is optional in the file; [`Config`] resolves missing values
//! against the defaults in [`defaults`], so a missing or partial file always
//! yields a usable configuration. The media catalog is part of the
//! configuration too: callers receive an injected `Config` instead of
//! reading module-level globals.

pub mod defaults;

pub use defaults::*;

use crate::domain::media::{validated_items, MediaItem, VideoItem};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SomeJazzPlaying";

/// Rotator timing overrides.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Milliseconds between rotation ticks.
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    /// Milliseconds between fade-out and source swap.
    #[serde(default)]
    pub fade_delay_ms: Option<u64>,
}

/// Audio session overrides.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Background radio stream URL.
    #[serde(default)]
    pub stream_url: Option<String>,
    /// Initial volume in [0.0, 1.0].
    #[serde(default)]
    pub volume: Option<f32>,
    /// Milliseconds to wait before the startup playback attempt.
    #[serde(default)]
    pub autoplay_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotator: RotatorConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    /// Landing collage catalog. `None` uses the built-in brand catalog.
    #[serde(default)]
    pub images: Option<Vec<MediaItem>>,
    /// Home screen video catalog. `None` uses the built-in brand catalog.
    #[serde(default)]
    pub videos: Option<Vec<VideoItem>>,
}

impl Config {
    /// Resolved rotation tick interval, clamped to the supported minimum.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .rotator
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .max(MIN_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Resolved fade delay. Never longer than the tick interval.
    #[must_use]
    pub fn fade_delay(&self) -> Duration {
        let tick = self.tick_interval();
        let fade = Duration::from_millis(self.rotator.fade_delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS));
        fade.min(tick)
    }

    /// Resolved startup playback attempt delay.
    #[must_use]
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(
            self.audio
                .autoplay_delay_ms
                .unwrap_or(DEFAULT_AUTOPLAY_DELAY_MS),
        )
    }

    /// Resolved stream URL.
    #[must_use]
    pub fn stream_url(&self) -> &str {
        self.audio.stream_url.as_deref().unwrap_or(DEFAULT_STREAM_URL)
    }

    /// Resolved initial volume, clamped to [`MIN_VOLUME`]..=[`MAX_VOLUME`].
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.audio
            .volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }

    /// Resolved, validated collage catalog. Misconfigured items are dropped;
    /// an all-invalid list comes back empty and the landing screen renders
    /// its plain fallback background.
    #[must_use]
    pub fn images(&self) -> Vec<MediaItem> {
        match &self.images {
            Some(raw) => validated_items(raw),
            None => default_images(),
        }
    }

    /// Resolved video catalog.
    #[must_use]
    pub fn videos(&self) -> Vec<VideoItem> {
        self.videos.clone().unwrap_or_else(default_videos)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("invalid settings file {}: {e}; using defaults", path.display());
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
