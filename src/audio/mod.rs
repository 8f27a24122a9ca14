// SPDX-License-Identifier: MPL-2.0
//! Background radio: session state machine, volume domain type, and the
//! cpal/FFmpeg stream backend.

mod session;
mod stream;
mod volume;

pub use session::{AudioSession, PlaybackResource, SessionState};
pub use stream::StreamPlayer;
pub use volume::Volume;
