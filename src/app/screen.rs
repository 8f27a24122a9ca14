// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Full-bleed collage with the brand title and the audio bar.
    Landing,
    /// Video archive with the month filter.
    Home,
}
