//! Layout pieces of an overlay dialog
//!
//! Independent of [`super::overlay`]: screens that manage their own show/hide
//! compose these directly.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use tidewatch_core::overlay::ContainerLayout;

/// Max-width box around dialog content
pub fn overlay_container<'a, Message: 'a>(
    layout: &ContainerLayout,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .max_width(layout.max_width as f32)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Title row with an optional dismiss button
pub fn overlay_heading<'a, Message: Clone + 'a>(
    title: &'a str,
    on_dismiss: Option<Message>,
) -> Element<'a, Message> {
    let title = text(title).size(20);

    let header = row![title, Space::new().width(Length::Fill)]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let header = match on_dismiss {
        Some(message) => header.push(
            button(text("×").size(20))
                .on_press(message)
                .style(button::secondary),
        ),
        None => header,
    };

    container(header).padding([20, 30]).into()
}

pub fn overlay_body<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content).padding([10, 30]).width(Length::Fill).into()
}

/// Right-aligned action row
pub fn overlay_footer<'a, Message: 'a>(
    actions: impl IntoIterator<Item = Element<'a, Message>>,
) -> Element<'a, Message> {
    let actions = actions
        .into_iter()
        .fold(row![Space::new().width(Length::Fill)].spacing(10), |row, action| row.push(action));

    container(column![actions].width(Length::Fill))
        .padding([20, 30])
        .into()
}
