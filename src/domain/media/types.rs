// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::BRAND_NAME;

/// A single collage image reference with a display label.
///
/// Items are static configuration: once validated at load time they are
/// never mutated. Construction goes through [`MediaItem::validated`], which
/// rejects items with a blank source so the rotator only ever sees
/// displayable entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    source: String,
    label: String,
}

impl MediaItem {
    /// Validates a raw `{source, label}` pair.
    ///
    /// Returns `None` when the source is empty or whitespace-only. A blank
    /// label falls back to the brand name so every item stays announceable.
    #[must_use]
    pub fn validated(source: &str, label: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }

        let label = label.trim();
        Some(Self {
            source: source.to_string(),
            label: if label.is_empty() {
                BRAND_NAME.to_string()
            } else {
                label.to_string()
            },
        })
    }

    /// Returns the image source (path or URI). Never empty.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Re-validates a configured list, dropping items with missing sources.
///
/// This is the load-time recovery for misconfigured entries: they are
/// excluded rather than surfaced as errors. An all-invalid list yields an
/// empty vector and the caller renders a plain fallback background.
#[must_use]
pub fn validated_items(raw: &[MediaItem]) -> Vec<MediaItem> {
    raw.iter()
        .filter_map(|item| MediaItem::validated(&item.source, &item.label))
        .collect()
}

/// One entry of the home-screen video archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    title: String,
    url: String,
    published: NaiveDate,
}

impl VideoItem {
    /// Creates a new archive entry.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, published: NaiveDate) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            published,
        }
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the video URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the publication date.
    #[must_use]
    pub fn published(&self) -> NaiveDate {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_accepts_well_formed_item() {
        let item = MediaItem::validated("zine/miles.jpg", "Miles").expect("valid item");
        assert_eq!(item.source(), "zine/miles.jpg");
        assert_eq!(item.label(), "Miles");
    }

    #[test]
    fn validated_rejects_empty_source() {
        assert!(MediaItem::validated("", "Jazz").is_none());
        assert!(MediaItem::validated("   ", "Jazz").is_none());
    }

    #[test]
    fn validated_trims_source_whitespace() {
        let item = MediaItem::validated("  zine/ella.jpg ", "Ella").expect("valid item");
        assert_eq!(item.source(), "zine/ella.jpg");
    }

    #[test]
    fn blank_label_falls_back_to_brand_name() {
        let item = MediaItem::validated("zine/trane.jpg", "").expect("valid item");
        assert_eq!(item.label(), BRAND_NAME);
    }

    #[test]
    fn validated_items_filters_bad_entries() {
        let raw = vec![
            MediaItem::validated("zine/a.jpg", "A").unwrap(),
            MediaItem {
                source: "  ".to_string(),
                label: "broken".to_string(),
            },
            MediaItem::validated("zine/b.jpg", "B").unwrap(),
        ];

        let items = validated_items(&raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source(), "zine/a.jpg");
        assert_eq!(items[1].source(), "zine/b.jpg");
    }

    #[test]
    fn all_invalid_list_yields_empty() {
        let raw = vec![MediaItem {
            source: String::new(),
            label: String::new(),
        }];
        assert!(validated_items(&raw).is_empty());
    }

    #[test]
    fn video_item_stores_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
        let video = VideoItem::new("Session cut", "https://example.com/v", date);

        assert_eq!(video.title(), "Session cut");
        assert_eq!(video.url(), "https://example.com/v");
        assert_eq!(video.published(), date);
    }
}
