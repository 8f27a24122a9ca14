// SPDX-License-Identifier: MPL-2.0
//! Radio controls shown in the corner of the landing screen.
//!
//! While playback is possible this is a plain play/pause toggle plus a
//! volume slider. When a play request was rejected the toggle is replaced
//! by a single "Sound on" button, since the next attempt has to come from
//! the user.

use crate::config::VOLUME_STEP;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, slider, text, Container, Row},
    Background, Border, Color, Element, Length, Theme,
};

/// Contextual data needed to render the audio bar.
pub struct ViewContext {
    pub playing: bool,
    pub needs_user_gesture: bool,
    pub volume: f32,
}

/// Messages emitted by the audio bar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Play/pause toggle or the "Sound on" button.
    Toggle,
    /// Volume slider moved.
    VolumeChanged(f32),
}

/// Render the audio bar.
#[must_use]
pub fn view<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let label = if ctx.needs_user_gesture {
        "Sound on"
    } else if ctx.playing {
        "Pause"
    } else {
        "Play"
    };

    let toggle = button(text(label).size(typography::BODY)).on_press(Message::Toggle);

    let volume = slider(0.0..=1.0, ctx.volume, Message::VolumeChanged)
        .step(VOLUME_STEP)
        .width(Length::Fixed(120.0));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(volume);

    Container::new(row)
        .padding(spacing::SM)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_bar_renders_in_every_state() {
        for (playing, needs_user_gesture) in
            [(false, false), (true, false), (false, true)]
        {
            let ctx = ViewContext {
                playing,
                needs_user_gesture,
                volume: 0.75,
            };
            let _element = view(&ctx);
        }
    }
}
