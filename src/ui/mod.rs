// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`collage`] - Full-bleed rotating image mosaic on the landing screen
//! - [`audio_bar`] - Radio controls (play/pause or "Sound on", volume)
//! - [`archive`] - Video archive with the month filter
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod archive;
pub mod audio_bar;
pub mod collage;
pub mod design_tokens;
