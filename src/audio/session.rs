// SPDX-License-Identifier: MPL-2.0
//! Audio session state machine.
//!
//! Wraps a single playback resource bound to one stream URL and manages
//! its play/pause/volume/mute state with clear transitions:
//! - Idle: nothing attempted yet
//! - Attempting: startup playback attempt in flight
//! - Playing: stream is audible
//! - Paused: user paused an established stream
//! - Blocked: a play request was rejected; waiting for a user gesture
//!
//! A rejected play request is expected, not exceptional. It flips the
//! session to `Blocked` and the UI swaps its Play/Pause control for a
//! "Sound on" affordance. No automatic retry is scheduled; only an
//! explicit [`AudioSession::toggle`] issues another play request.

use super::Volume;
use crate::error::Result;
use tracing::debug;

/// Minimal capability set the session needs from a playback backend.
///
/// Mirrors the media-element surface the controller drives: an async-ish
/// play that can be rejected, a synchronous pause, settable volume and
/// mute, and a synchronously readable paused flag.
pub trait PlaybackResource {
    /// Requests playback. An `Err` means the request was rejected
    /// (no device, stream refused) and the session enters `Blocked`.
    fn play(&mut self) -> Result<()>;

    /// Stops producing sound. Never fails.
    fn pause(&mut self);

    /// Reports whether the resource is currently paused.
    fn is_paused(&self) -> bool;

    /// Applies a volume level immediately. Idempotent.
    fn set_volume(&mut self, volume: Volume);

    /// Applies a mute flag immediately. Idempotent.
    fn set_muted(&mut self, muted: bool);
}

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No playback attempted yet.
    Idle,
    /// Startup attempt in flight.
    Attempting,
    /// Stream is playing.
    Playing,
    /// User paused the stream.
    Paused,
    /// Play request rejected; waiting for a user gesture.
    Blocked,
}

/// Controls one playback resource bound to a single stream URL.
#[derive(Debug)]
pub struct AudioSession<R: PlaybackResource> {
    resource: R,
    state: SessionState,
    volume: Volume,
    muted: bool,
}

impl<R: PlaybackResource> AudioSession<R> {
    /// Creates an idle session around a resource. Nothing is played until
    /// [`AudioSession::attempt_autoplay`] or [`AudioSession::toggle`].
    #[must_use]
    pub fn new(resource: R, volume: Volume) -> Self {
        Self {
            resource,
            state: SessionState::Idle,
            volume,
            muted: false,
        }
    }

    /// Startup playback attempt, unmuted, at the configured volume.
    ///
    /// Called once by the app shell after a short delay (the backend may
    /// reject a request issued before the device is ready). Success moves
    /// to `Playing`; rejection moves to `Blocked` with no retry scheduled.
    pub fn attempt_autoplay(&mut self) {
        self.state = SessionState::Attempting;
        self.resource.set_muted(false);
        self.muted = false;
        self.resource.set_volume(self.volume);
        self.request_play();
    }

    /// Play if paused, pause if playing.
    ///
    /// Always consults the resource's own paused flag rather than the
    /// session state, and always issues a real request: a `toggle` while
    /// `Blocked` retries playback, and a fresh rejection re-enters
    /// `Blocked`.
    pub fn toggle(&mut self) {
        if self.resource.is_paused() {
            self.resource.set_muted(false);
            self.muted = false;
            self.request_play();
        } else {
            self.resource.pause();
            self.state = SessionState::Paused;
        }
    }

    /// Sets the volume, clamped to [0.0, 1.0], applied immediately.
    /// Does not affect the play/pause state.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = Volume::new(volume);
        self.resource.set_volume(self.volume);
    }

    /// Sets the mute flag, applied immediately.
    /// Does not affect the play/pause state.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.resource.set_muted(muted);
    }

    /// Returns `true` while the stream is audible.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Returns `true` when playback was rejected and the UI should offer
    /// an explicit "Sound on" affordance instead of Play/Pause.
    #[must_use]
    pub fn needs_user_gesture(&self) -> bool {
        self.state == SessionState::Blocked
    }

    /// Current volume level.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Current mute flag.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The wrapped playback resource.
    #[must_use]
    pub fn resource(&self) -> &R {
        &self.resource
    }

    fn request_play(&mut self) {
        match self.resource.play() {
            Ok(()) => {
                self.state = SessionState::Playing;
            }
            Err(err) => {
                debug!("play request rejected: {err}");
                self.state = SessionState::Blocked;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::test_utils::assert_abs_diff_eq;

    /// Scriptable fake resource: each play request consumes the next
    /// scripted outcome (true = accept, false = reject).
    struct FakeResource {
        outcomes: Vec<bool>,
        paused: bool,
        volume: f32,
        muted: bool,
        play_requests: usize,
    }

    impl FakeResource {
        fn scripted(outcomes: &[bool]) -> Self {
            Self {
                outcomes: outcomes.to_vec(),
                paused: true,
                volume: 1.0,
                muted: false,
                play_requests: 0,
            }
        }
    }

    impl PlaybackResource for FakeResource {
        fn play(&mut self) -> Result<()> {
            self.play_requests += 1;
            let accepted = if self.outcomes.is_empty() {
                true
            } else {
                self.outcomes.remove(0)
            };
            if accepted {
                self.paused = false;
                Ok(())
            } else {
                Err(AudioError::StreamRejected("scripted rejection".into()).into())
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn set_volume(&mut self, volume: Volume) {
            self.volume = volume.value();
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }
    }

    fn session(outcomes: &[bool]) -> AudioSession<FakeResource> {
        AudioSession::new(FakeResource::scripted(outcomes), Volume::new(0.75))
    }

    #[test]
    fn new_session_is_idle() {
        let session = session(&[]);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_playing());
        assert!(!session.needs_user_gesture());
    }

    #[test]
    fn successful_autoplay_enters_playing_unmuted() {
        let mut session = session(&[true]);
        session.attempt_autoplay();

        assert!(session.is_playing());
        assert!(!session.needs_user_gesture());
        assert!(!session.resource.muted);
        assert_abs_diff_eq!(session.resource.volume, 0.75);
    }

    #[test]
    fn rejected_autoplay_enters_blocked_without_retry() {
        let mut session = session(&[false]);
        session.attempt_autoplay();

        assert!(!session.is_playing());
        assert!(session.needs_user_gesture());
        // Exactly one request: no automatic retry is scheduled.
        assert_eq!(session.resource.play_requests, 1);
    }

    #[test]
    fn toggle_from_blocked_retries_and_can_succeed() {
        let mut session = session(&[false, true]);
        session.attempt_autoplay();
        assert!(session.needs_user_gesture());

        // User taps "Sound on": a fresh play request is issued.
        session.toggle();
        assert!(session.is_playing());
        assert!(!session.needs_user_gesture());
        assert_eq!(session.resource.play_requests, 2);
    }

    #[test]
    fn toggle_from_blocked_can_reject_again() {
        let mut session = session(&[false, false]);
        session.attempt_autoplay();
        session.toggle();

        assert!(session.needs_user_gesture());
        assert!(!session.is_playing());
    }

    #[test]
    fn toggle_pauses_a_playing_stream() {
        let mut session = session(&[true]);
        session.attempt_autoplay();

        session.toggle();
        assert_eq!(session.state(), SessionState::Paused);
        assert!(session.resource.is_paused());
        assert!(!session.is_playing());
    }

    #[test]
    fn toggle_resumes_a_paused_stream() {
        let mut session = session(&[true, true]);
        session.attempt_autoplay();
        session.toggle(); // pause
        session.toggle(); // resume

        assert!(session.is_playing());
    }

    #[test]
    fn toggle_consults_resource_not_stale_state() {
        let mut session = session(&[true]);
        session.attempt_autoplay();

        // The resource pauses behind the session's back.
        session.resource.paused = true;

        // toggle() must issue a play request, not a pause.
        session.toggle();
        assert!(session.is_playing());
        assert_eq!(session.resource.play_requests, 2);
    }

    #[test]
    fn set_volume_applies_exactly_and_keeps_state() {
        let mut session = session(&[true]);
        session.attempt_autoplay();

        session.set_volume(0.33);
        assert_abs_diff_eq!(session.resource.volume, 0.33);
        assert!(session.is_playing());

        // Clamped at the edges.
        session.set_volume(7.0);
        assert_abs_diff_eq!(session.resource.volume, 1.0);
        session.set_volume(-1.0);
        assert_abs_diff_eq!(session.resource.volume, 0.0);
        assert!(session.is_playing());
    }

    #[test]
    fn set_muted_applies_and_keeps_state() {
        let mut session = session(&[true]);
        session.attempt_autoplay();

        session.set_muted(true);
        assert!(session.is_muted());
        assert!(session.resource.muted);
        assert!(session.is_playing());

        // Idempotent: setting the same value twice changes nothing.
        session.set_muted(true);
        assert!(session.is_muted());
    }

    #[test]
    fn toggle_unmutes_before_playing() {
        let mut session = session(&[true]);
        session.set_muted(true);

        session.toggle();
        assert!(!session.resource.muted);
        assert!(!session.is_muted());
        assert!(session.is_playing());
    }
}
