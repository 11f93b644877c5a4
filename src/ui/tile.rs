//! Wallpaper tile for the gallery grid
//!
//! A pure function of the wallpaper record and its image state: the same
//! inputs always build the same widget tree. The tile never changes the
//! favorite flag itself, it only emits the request to flip it.

use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Space};
use iced::{mouse, Background, ContentFit, Element, Length, Shadow, Theme};

use super::theme::{self, LEXEND};
use crate::remote::Thumbnail;
use crate::state::data::Wallpaper;
use crate::state::gallery::GalleryEvent;

/// Height of a grid thumbnail
pub const TILE_HEIGHT: f32 = 320.0;

pub fn view<'a>(wallpaper: &'a Wallpaper, thumbnail: Option<&'a Thumbnail>) -> Element<'a, GalleryEvent> {
    let picture: Element<'a, GalleryEvent> = match thumbnail {
        Some(Thumbnail::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Loading and failed images share the same empty frame
        _ => Space::new(Length::Fill, Length::Fixed(TILE_HEIGHT)).into(),
    };

    let heart = button(
        text(if wallpaper.is_favorite { "♥" } else { "♡" })
            .size(16)
            .color(if wallpaper.is_favorite {
                theme::FAVORITE_ON
            } else {
                theme::FAVORITE_OFF
            }),
    )
    .on_press(GalleryEvent::FavoriteToggled(
        wallpaper.id.clone(),
        !wallpaper.is_favorite,
    ))
    .padding([6, 9])
    .style(|_theme: &Theme, _status| button::Style {
        background: Some(Background::Color(theme::scrim(0.35))),
        text_color: iced::Color::WHITE,
        border: theme::rounded(16.0),
        shadow: Shadow::default(),
    });

    let caption: Element<'a, GalleryEvent> = match &wallpaper.title {
        Some(title) => container(text(title).size(12).font(LEXEND).color(iced::Color::WHITE))
            .padding([6, 8])
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::scrim(0.5))),
                border: theme::rounded(8.0),
                ..container::Style::default()
            })
            .into(),
        None => Space::with_width(Length::Shrink).into(),
    };

    let overlay = column![
        row![Space::with_width(Length::Fill), heart],
        Space::with_height(Length::Fill),
        row![caption, Space::with_width(Length::Fixed(36.0))],
    ]
    .padding(8)
    .width(Length::Fill)
    .height(Length::Fill);

    let body = container(stack![picture, overlay])
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::TILE_BACKGROUND)),
            border: theme::rounded(12.0),
            ..container::Style::default()
        });

    mouse_area(body)
        .on_press(GalleryEvent::TileActivated(wallpaper.id.clone()))
        .on_right_press(GalleryEvent::LongPressed(wallpaper.id.clone()))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
