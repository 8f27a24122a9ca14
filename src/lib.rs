// SPDX-License-Identifier: MPL-2.0
//! `jazz_zine` is a small desktop zine built with the Iced GUI framework:
//! a full-screen rotating collage of jazz photography with a background
//! radio stream, and a video archive browsable by month.

#![doc(html_root_url = "https://docs.rs/jazz_zine/0.1.0")]

pub mod app;
pub mod audio;
pub mod config;
pub mod domain;
pub mod error;
pub mod rotator;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
