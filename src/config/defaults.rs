// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application, plus the built-in brand catalog used when
//! no `settings.toml` overrides it.

use crate::domain::media::{MediaItem, VideoItem};
use chrono::NaiveDate;

// ==========================================================================
// Rotator Defaults
// ==========================================================================

/// Interval between collage rotation ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3600;

/// Delay between fade-out and source swap, in milliseconds.
/// The outgoing frame drops to transparent, then the incoming frame fades in.
pub const DEFAULT_FADE_DELAY_MS: u64 = 160;

/// Minimum accepted tick interval. Anything shorter than the fade delay
/// would swap sources mid-fade.
pub const MIN_TICK_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Default background radio stream.
pub const DEFAULT_STREAM_URL: &str = "https://icecast.radiofrance.fr/fip-hifi.aac";

/// Delay before the startup playback attempt, in milliseconds.
/// Some output backends reject a play request issued before the device
/// has finished initializing.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 150;

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.75;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP: f32 = 0.05;

// ==========================================================================
// Collage Defaults
// ==========================================================================

/// Rotation offsets of the three collage frames. Each frame shows the item
/// `offset` positions ahead of the rotator's counter so the frames never
/// display the same image at the same time.
pub const FRAME_OFFSETS: [u64; 3] = [0, 2, 4];

/// Fallback label for items configured without one.
pub const BRAND_NAME: &str = "Some Jazz Playing";

/// Built-in landing collage catalog.
pub fn default_images() -> Vec<MediaItem> {
    [
        "zine/npr.brightspotcdn.png",
        "zine/Mo-Better-Blues-h.jpg",
        "zine/Lee_Mo_Better_Blues_01.jpg.avif",
        "zine/AP070223014369.jpg",
        "zine/Ella_Fitzgerald_6_(cropped).jpg",
        "zine/alice-coltrane-eshot.jpg",
        "zine/aef6b5f322f5a251c74d29157f3da543.jpg",
        "zine/Stewart_Dolphy_1440.jpg",
        "zine/john-coletrane-newport-jazz.jpg",
        "zine/Miles-Davis-in-1989-006.avif",
    ]
    .into_iter()
    .filter_map(|source| MediaItem::validated(source, "Jazz"))
    .collect()
}

/// Built-in video catalog shown on the home screen.
pub fn default_videos() -> Vec<VideoItem> {
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid built-in catalog date")
    }

    vec![
        VideoItem::new(
            "Blue in Green — session cut",
            "https://www.youtube.com/watch?v=TLDflhhdPCg",
            date(2025, 7, 3),
        ),
        VideoItem::new(
            "Alice Coltrane — Turiya and Ramakrishna",
            "https://www.youtube.com/watch?v=pK6U6V4slLw",
            date(2025, 7, 18),
        ),
        VideoItem::new(
            "Eric Dolphy — Out to Lunch picks",
            "https://www.youtube.com/watch?v=kqfwbZMCNBc",
            date(2025, 6, 9),
        ),
        VideoItem::new(
            "Ella at Newport — archive reel",
            "https://www.youtube.com/watch?v=ZIoUKr1Eqek",
            date(2025, 5, 27),
        ),
        VideoItem::new(
            "Mo' Better Blues — opening theme",
            "https://www.youtube.com/watch?v=eXbOW8GOSTE",
            date(2025, 5, 2),
        ),
    ]
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_FADE_DELAY_MS < MIN_TICK_INTERVAL_MS);

    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);
};
