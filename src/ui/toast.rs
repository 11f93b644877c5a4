//! Toast overlay for acknowledgements, stacked in the bottom-right corner.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{alignment, Background, Border, Element, Length, Shadow, Theme};

use super::theme::{self, LEXEND};
use crate::notifications::{Toast, Toasts};
use crate::Message;

const TOAST_WIDTH: f32 = 280.0;

pub fn view_overlay(toasts: &Toasts) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = toasts.visible().map(view).collect();

    if cards.is_empty() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    container(
        Column::with_children(cards)
            .spacing(8)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(16)
    .into()
}

fn view(toast: &Toast) -> Element<'_, Message> {
    let message = column![
        text(toast.title).size(14).font(LEXEND),
        text(&toast.body).size(12),
    ]
    .spacing(2)
    .width(Length::Fill);

    let dismiss = button(text("✕").size(10))
        .on_press(Message::DismissToast(toast.id()))
        .padding([2, 6])
        .style(|theme: &Theme, _status| button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border::default(),
            shadow: Shadow::default(),
        });

    container(row![message, dismiss].spacing(8).align_y(alignment::Vertical::Center))
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(12)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(theme::HEADER_BACKGROUND)),
            border: Border {
                color: theme.palette().primary,
                width: 1.0,
                radius: 8.0.into(),
            },
            text_color: Some(theme.palette().text),
            ..container::Style::default()
        })
        .into()
}
