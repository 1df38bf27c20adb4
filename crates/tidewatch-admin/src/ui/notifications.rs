//! Notification toasts, newest on top

use iced::widget::{button, container, row, text, Column, Space};
use iced::{Alignment, Border, Color, Element, Length};
use tidewatch_core::store::Notification;
use tidewatch_widgets::theme::notification_color;

use super::message::Message;

const TOAST_WIDTH: f32 = 320.0;

pub fn view(notifications: &[Notification]) -> Element<'_, Message> {
    let toasts = notifications
        .iter()
        .fold(Column::new().spacing(8), |col, notification| col.push(toast(notification)));

    container(toasts)
        .width(Length::Fill)
        .align_x(Alignment::End)
        .padding(20)
        .into()
}

fn toast(notification: &Notification) -> Element<'_, Message> {
    let background = notification_color(notification.style);

    let content = row![
        text(&notification.message).size(14).color(Color::WHITE),
        Space::new().width(Length::Fill),
        button(text("×").size(16))
            .on_press(Message::DismissNotification(notification.id))
            .style(button::text),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding([8, 12])
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
