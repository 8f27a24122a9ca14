// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Timer-driven behavior lives here: a rotation tick starts the fade-out
//! and schedules the one-shot swap task after the fade delay, and the
//! startup delay triggers the single unmuted playback attempt. Everything
//! else is a direct state transition.

use super::{App, Message, Screen};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::RotatorTick(_) => {
            // The subscription only runs on the landing screen, but a tick
            // can still arrive after a switch; ignore it instead of fading
            // a collage nobody sees.
            if app.screen == Screen::Landing && app.rotator.advance() {
                let delay = app.fade_delay;
                Task::perform(tokio::time::sleep(delay), |_| Message::RotatorSwap)
            } else {
                Task::none()
            }
        }
        Message::RotatorSwap => {
            app.rotator.commit();
            Task::none()
        }
        Message::AutoplayDelayElapsed => {
            app.audio.attempt_autoplay();
            Task::none()
        }
        Message::ToggleAudio => {
            app.audio.toggle();
            Task::none()
        }
        Message::VolumeChanged(volume) => {
            app.audio.set_volume(volume);
            Task::none()
        }
        Message::ArchiveFilterSelected(filter) => {
            app.archive_filter = filter;
            Task::none()
        }
    }
}
