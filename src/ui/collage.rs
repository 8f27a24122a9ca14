// SPDX-License-Identifier: MPL-2.0
//! Landing collage: a full-bleed mosaic of rotating images with the brand
//! title and the entry button layered on top.
//!
//! The mosaic shows several frames at staggered offsets into the image
//! list so neighbouring frames never display the same picture. A rotation
//! step fades every frame out together, and the swap after the fade delay
//! brings the next images in.

use crate::config::{BRAND_NAME, FRAME_OFFSETS};
use crate::rotator::Rotator;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, image, stack, text, Column, Container, Row},
    Background, ContentFit, Element, Length, Theme,
};

/// Contextual data needed to render the collage.
pub struct ViewContext<'a> {
    pub rotator: &'a Rotator,
}

/// Messages emitted by the collage.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// User pressed the entry button.
    Enter,
}

/// Render the landing collage with the title overlay.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop: Element<'_, Message> = if ctx.rotator.is_empty() {
        plain_backdrop()
    } else {
        mosaic(ctx.rotator)
    };

    stack![backdrop, overlay()]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Solid fallback shown when no image survived validation.
fn plain_backdrop<'a>() -> Element<'a, Message> {
    Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        })
        .into()
}

/// One frame per configured offset, side by side, all fading in lockstep.
fn mosaic(rotator: &Rotator) -> Element<'_, Message> {
    let frame_opacity = if rotator.is_faded_in() {
        opacity::OPAQUE
    } else {
        opacity::TRANSPARENT
    };

    let mut row = Row::new().width(Length::Fill).height(Length::Fill);
    for offset in FRAME_OFFSETS {
        if let Some(item) = rotator.frame_item(offset) {
            let frame = image(image::Handle::from_path(item.source()))
                .content_fit(ContentFit::Cover)
                .opacity(frame_opacity)
                .width(Length::Fill)
                .height(Length::Fill);

            row = row.push(
                Container::new(frame)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill)
                    .clip(true)
                    .style(|_theme: &Theme| container::Style {
                        background: Some(Background::Color(palette::BLACK)),
                        ..Default::default()
                    }),
            );
        }
    }

    row.into()
}

/// Brand title and entry button, centered over the mosaic.
fn overlay<'a>() -> Element<'a, Message> {
    let title = text(BRAND_NAME)
        .size(typography::TITLE_XL)
        .color(palette::WHITE);

    let enter = button(text("ENTER").size(typography::TITLE_SM))
        .padding([spacing::SM, spacing::XL])
        .on_press(Message::Enter);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(enter);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
