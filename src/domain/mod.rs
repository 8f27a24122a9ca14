// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure data types without presentation dependencies.

pub mod media;
