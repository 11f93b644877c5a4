//! Shell layout: header, active screen, drawer and toast overlays.

use iced::advanced::widget::operation::{Focusable, Operation, Outcome};
use iced::advanced::widget::Id;
use iced::widget::{
    button, center, column, container, mouse_area, row, stack, text, text_input, Column, Space,
};
use iced::{alignment, Background, Border, Element, Length, Rectangle, Shadow, Theme};

use super::theme::{self, LEXEND};
use crate::notifications::Toasts;
use crate::remote::ImageCache;
use crate::state::gallery::Gallery;
use crate::state::shell::{HeaderContent, Route, ShellState};
use crate::Message;

const DRAWER_WIDTH: f32 = 260.0;
const SEARCH_WIDTH: f32 = 220.0;

/// Id of the header search field, used to focus it when search opens
pub fn search_input_id() -> text_input::Id {
    text_input::Id::new("header-search")
}

/// Widget operation reporting whether the header search field holds focus.
///
/// A field missing from the tree counts as unfocused.
pub struct SearchFocus {
    target: Id,
    focused: bool,
}

impl Default for SearchFocus {
    fn default() -> Self {
        Self {
            target: search_input_id().into(),
            focused: false,
        }
    }
}

impl SearchFocus {
    #[cfg(test)]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Operation<bool> for SearchFocus {
    fn container(
        &mut self,
        _id: Option<&Id>,
        _bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<bool>),
    ) {
        operate_on_children(self);
    }

    fn focusable(&mut self, state: &mut dyn Focusable, id: Option<&Id>) {
        if id == Some(&self.target) {
            self.focused = state.is_focused();
        }
    }

    fn finish(&self) -> Outcome<bool> {
        Outcome::Some(self.focused)
    }
}

pub fn view<'a>(
    shell: &'a ShellState,
    gallery: &'a Gallery,
    images: &'a ImageCache,
    toasts: &'a Toasts,
) -> Element<'a, Message> {
    let screen: Element<'a, Message> = if shell.active().is_gallery() {
        super::gallery::view(gallery, images).map(Message::Gallery)
    } else {
        placeholder(shell.active())
    };

    let page = column![header(shell), screen];

    let drawer_layer: Element<'a, Message> = if shell.drawer_open() {
        drawer(shell.active())
    } else {
        Space::new(Length::Shrink, Length::Shrink).into()
    };

    stack![page, drawer_layer, super::toast::view_overlay(toasts)].into()
}

fn header(shell: &ShellState) -> Element<'_, Message> {
    let title: Element<'_, Message> = match shell.header() {
        HeaderContent::Title(label) => text(label).size(16).font(LEXEND).into(),
        HeaderContent::Search(query) => text_input("Search wallpapers...", query)
            .id(search_input_id())
            .on_input(Message::SearchChanged)
            .on_submit(Message::SearchBlurred)
            .font(LEXEND)
            .size(14)
            .width(Length::Fixed(SEARCH_WIDTH))
            .style(|theme: &Theme, status| text_input::Style {
                placeholder: theme::PLACEHOLDER_TEXT,
                ..text_input::default(theme, status)
            })
            .into(),
    };

    let bar = row![
        icon_button("☰", Message::ToggleDrawer),
        container(title).width(Length::Fill).padding([0, 8]),
        icon_button("⌕", Message::ToggleSearch),
    ]
    .spacing(4)
    .align_y(alignment::Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .padding([8, 12])
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(theme::HEADER_BACKGROUND)),
            text_color: Some(theme.palette().text),
            ..container::Style::default()
        })
        .into()
}

fn icon_button(glyph: &'static str, message: Message) -> Element<'static, Message> {
    button(text(glyph).size(20))
        .on_press(message)
        .padding([2, 8])
        .style(|theme: &Theme, _status| button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border::default(),
            shadow: Shadow::default(),
        })
        .into()
}

/// Stand-in for screens that are not built yet
fn placeholder(route: Route) -> Element<'static, Message> {
    center(text(route.label()).font(LEXEND)).into()
}

fn drawer(active: Route) -> Element<'static, Message> {
    let items = Route::ALL.iter().fold(Column::new().spacing(4).padding(12), |items, &route| {
        let selected = route == active;
        items.push(
            button(text(route.label()).size(14).font(LEXEND))
                .on_press(Message::Navigate(route))
                .width(Length::Fill)
                .padding([10, 12])
                .style(move |theme: &Theme, status| {
                    let palette = theme.extended_palette();
                    let background = if selected {
                        Some(Background::Color(palette.primary.weak.color))
                    } else if matches!(status, button::Status::Hovered) {
                        Some(Background::Color(palette.background.weak.color))
                    } else {
                        None
                    };
                    button::Style {
                        background,
                        text_color: palette.background.base.text,
                        border: theme::rounded(8.0),
                        shadow: Shadow::default(),
                    }
                }),
        )
    });

    let panel = container(items)
        .width(Length::Fixed(DRAWER_WIDTH))
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::HEADER_BACKGROUND)),
            ..container::Style::default()
        });

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill)).style(|_theme| container::Style {
            background: Some(Background::Color(theme::scrim(0.5))),
            ..container::Style::default()
        }),
    )
    .on_press(Message::ToggleDrawer);

    row![panel, backdrop].into()
}
