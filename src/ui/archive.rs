// SPDX-License-Identifier: MPL-2.0
//! Video archive screen with the month filter.
//!
//! The dropdown is derived from the catalog itself: it offers "All months"
//! plus every month that actually contains a video, newest first. The list
//! below shows the videos matching the selected filter in catalog order.

use crate::domain::media::{archive_months, ArchiveFilter, VideoItem};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, pick_list, scrollable, text, Column, Container, Row},
    Background, Border, Element, Length, Theme,
};

/// Contextual data needed to render the archive.
pub struct ViewContext<'a> {
    pub videos: &'a [VideoItem],
    pub filter: ArchiveFilter,
}

/// Messages emitted by the archive screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Return to the landing collage.
    Back,
    /// A filter choice was picked from the dropdown.
    FilterSelected(ArchiveFilter),
}

/// Render the archive screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back = button(text("\u{2190} Back").size(typography::BODY)).on_press(Message::Back);
    let title = text("Video archive").size(typography::TITLE_LG);

    let mut options = vec![ArchiveFilter::All];
    options.extend(archive_months(ctx.videos).into_iter().map(ArchiveFilter::Month));
    let filter_picker = pick_list(options, Some(ctx.filter), Message::FilterSelected);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(back)
        .push(title)
        .push(iced::widget::space::horizontal())
        .push(filter_picker);

    let hits = ctx.filter.apply(ctx.videos);
    let listing: Element<'_, Message> = if hits.is_empty() {
        empty_listing()
    } else {
        let mut column = Column::new().spacing(spacing::SM);
        for video in hits {
            column = column.push(video_card(video));
        }
        scrollable(column).height(Length::Fill).into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(listing);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_listing<'a>() -> Element<'a, Message> {
    Container::new(
        text("No videos in this month.")
            .size(typography::BODY)
            .color(palette::GRAY_300),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn video_card(video: &VideoItem) -> Element<'_, Message> {
    let title = text(video.title()).size(typography::TITLE_SM);
    let published = text(video.published().format("%-d %B %Y").to_string())
        .size(typography::CAPTION)
        .color(palette::GRAY_300);
    let url = text(video.url()).size(typography::CAPTION).color(palette::GRAY_300);

    let inner = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(published)
        .push(url);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
