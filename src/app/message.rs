// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::media::ArchiveFilter;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigate to another screen.
    SwitchScreen(Screen),
    /// Periodic rotation tick from the collage subscription.
    RotatorTick(Instant),
    /// The fade delay elapsed; swap the displayed collage item.
    RotatorSwap,
    /// The startup delay elapsed; attempt unmuted playback once.
    AutoplayDelayElapsed,
    /// User pressed Play/Pause or "Sound on".
    ToggleAudio,
    /// User dragged the volume slider.
    VolumeChanged(f32),
    /// User picked an archive month (or "All months").
    ArchiveFilterSelected(ArchiveFilter),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a `settings.toml` overriding the default location.
    pub config_path: Option<String>,
    /// Optional stream URL override, taking precedence over configuration.
    pub stream_url: Option<String>,
}
