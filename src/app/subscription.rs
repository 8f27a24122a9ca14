// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message, Screen};
use iced::Subscription;

/// Periodic rotation ticks for the landing collage.
///
/// Only active while the collage is visible and actually has something to
/// rotate; dropping the subscription cancels the timer, so leaving the
/// landing screen stops the clock rather than queueing stale ticks.
pub(super) fn rotation(app: &App) -> Subscription<Message> {
    if app.screen == Screen::Landing && app.rotator.should_rotate() {
        iced::time::every(app.tick_interval).map(Message::RotatorTick)
    } else {
        Subscription::none()
    }
}
