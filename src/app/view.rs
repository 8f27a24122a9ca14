// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the screen components and maps their local messages into
//! top-level ones.

use super::{App, Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::{archive, audio_bar, collage};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{stack, Container},
    Element, Length,
};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Landing => view_landing(app),
        Screen::Home => view_home(app),
    }
}

fn view_landing(app: &App) -> Element<'_, Message> {
    let collage = collage::view(collage::ViewContext {
        rotator: &app.rotator,
    })
    .map(|msg| match msg {
        collage::Message::Enter => Message::SwitchScreen(Screen::Home),
    });

    let audio_bar = audio_bar::view(&audio_bar::ViewContext {
        playing: app.audio.is_playing(),
        needs_user_gesture: app.audio.needs_user_gesture(),
        volume: app.audio.volume().value(),
    })
    .map(|msg| match msg {
        audio_bar::Message::Toggle => Message::ToggleAudio,
        audio_bar::Message::VolumeChanged(volume) => Message::VolumeChanged(volume),
    });

    // Pin the audio bar to the bottom-right corner, over the collage.
    let audio_corner = Container::new(audio_bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD);

    stack![collage, audio_corner]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_home(app: &App) -> Element<'_, Message> {
    archive::view(archive::ViewContext {
        videos: &app.videos,
        filter: app.archive_filter,
    })
    .map(|msg| match msg {
        archive::Message::Back => Message::SwitchScreen(Screen::Landing),
        archive::Message::FilterSelected(filter) => Message::ArchiveFilterSelected(filter),
    })
}
