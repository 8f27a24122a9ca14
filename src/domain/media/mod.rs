// SPDX-License-Identifier: MPL-2.0
//! Media domain types: collage items and the video archive.

mod archive;
mod types;

pub use archive::{archive_months, ArchiveFilter, ArchiveMonth};
pub use types::{validated_items, MediaItem, VideoItem};
