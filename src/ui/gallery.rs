//! Latest Updates screen: the two-column grid and the preview modal

use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
    Column, Row, Space,
};
use iced::{Background, ContentFit, Element, Length, Shadow, Theme};

use super::theme::{self, LEXEND};
use super::tile;
use crate::remote::{ImageCache, Thumbnail};
use crate::state::data::Wallpaper;
use crate::state::gallery::{Gallery, GalleryEvent, COLUMNS};

/// Gap between tiles and around the grid
const SPACING: f32 = 12.0;

/// Preview card keeps a 9:16 portrait frame
const PREVIEW_WIDTH: f32 = 360.0;
const PREVIEW_HEIGHT: f32 = 640.0;

pub fn view<'a>(gallery: &'a Gallery, images: &'a ImageCache) -> Element<'a, GalleryEvent> {
    let grid = gallery.rows().fold(
        Column::new().spacing(SPACING).padding(SPACING),
        |grid, wallpapers| {
            let mut cells = Row::new().spacing(SPACING);
            for wallpaper in wallpapers {
                cells = cells.push(
                    container(tile::view(wallpaper, images.get(&wallpaper.image_url)))
                        .width(Length::FillPortion(1)),
                );
            }
            // Keep the last cell half-width when the count is odd
            for _ in wallpapers.len()..COLUMNS {
                cells = cells.push(Space::with_width(Length::FillPortion(1)));
            }
            grid.push(cells)
        },
    );

    let grid = scrollable(grid).width(Length::Fill).height(Length::Fill);

    // The grid stays the first layer so its scroll position survives the modal
    let modal: Element<'a, GalleryEvent> = match gallery.preview() {
        Some(wallpaper) => preview(wallpaper, images),
        None => Space::new(Length::Shrink, Length::Shrink).into(),
    };

    stack![grid, modal].into()
}

fn preview<'a>(wallpaper: &'a Wallpaper, images: &'a ImageCache) -> Element<'a, GalleryEvent> {
    let picture: Element<'a, GalleryEvent> = match images.get(&wallpaper.image_url) {
        Some(Thumbnail::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        _ => Space::new(Length::Fill, Length::Fill).into(),
    };

    let close = button(text("✕").size(10))
        .on_press(GalleryEvent::ClosePreview)
        .padding([4, 8])
        .style(|_theme: &Theme, _status| button::Style {
            background: Some(Background::Color(theme::scrim(0.55))),
            text_color: iced::Color::WHITE,
            border: theme::rounded(12.0),
            shadow: Shadow::default(),
        });

    let actions = row![
        action("Download", GalleryEvent::Download),
        action("Set as wallpaper", GalleryEvent::SetAsWallpaper),
    ]
    .spacing(SPACING);

    let controls = column![
        row![Space::with_width(Length::Fill), close],
        Space::with_height(Length::Fill),
        actions,
    ]
    .padding(SPACING)
    .width(Length::Fill)
    .height(Length::Fill);

    let card = container(stack![picture, controls])
        .width(Length::Fixed(PREVIEW_WIDTH))
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::HEADER_BACKGROUND)),
            border: theme::rounded(16.0),
            ..container::Style::default()
        });

    // Clicks on the backdrop (but not on the card) ask to dismiss
    opaque(
        mouse_area(center(opaque(card)).padding(16).style(|_theme| container::Style {
            background: Some(Background::Color(theme::scrim(0.7))),
            ..container::Style::default()
        }))
        .on_press(GalleryEvent::DismissRequested),
    )
}

fn action<'a>(label: &'a str, event: GalleryEvent) -> Element<'a, GalleryEvent> {
    button(
        container(text(label).size(14).font(LEXEND).color(iced::Color::WHITE))
            .center_x(Length::Fill),
    )
    .on_press(event)
    .width(Length::Fill)
    .padding([12, 0])
    .style(|_theme: &Theme, _status| button::Style {
        background: Some(Background::Color(theme::scrim(0.55))),
        text_color: iced::Color::WHITE,
        border: theme::rounded(12.0),
        shadow: Shadow::default(),
    })
    .into()
}
