//! Create-variable dialog
//!
//! Drawn with the overlay layout pieces directly rather than `overlay`: it
//! appears and disappears with its own visibility flag.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, stack, text, text_input, Space,
};
use iced::{Color, Element, Length};
use tidewatch_core::overlay::ContainerLayout;
use tidewatch_widgets::theme::ERROR_TEXT;
use tidewatch_widgets::{overlay_body, overlay_container, overlay_footer, overlay_heading};

use super::message::Message;
use super::state::VariableForm;

const FORM_MAX_WIDTH: u32 = 1000;
const TEST_ID: &str = "create-variable";

pub fn view(form: &VariableForm) -> Element<'_, Message> {
    let layout = ContainerLayout::new(FORM_MAX_WIDTH, TEST_ID);

    let mut fields = column![
        text("Name").size(14),
        text_input("Give your variable a name", &form.draft.name)
            .on_input(Message::VariableNameChanged)
            .padding(8),
        text("Script").size(14),
        text_input("Flux query", &form.draft.script)
            .on_input(Message::VariableScriptChanged)
            .on_submit(Message::SubmitVariable)
            .padding(8),
    ]
    .spacing(8);

    if let Some(error) = form.error {
        fields = fields.push(text(error).size(13).color(ERROR_TEXT));
    }

    let actions: [Element<'_, Message>; 2] = [
        button(text("Cancel"))
            .on_press(Message::DismissCreateVariable)
            .style(button::secondary)
            .into(),
        button(text("Create")).on_press(Message::SubmitVariable).into(),
    ];

    let dialog = overlay_container(
        &layout,
        column![
            overlay_heading("Create Variable", Some(Message::DismissCreateVariable)),
            overlay_body(fields),
            overlay_footer(actions),
        ],
    );

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..Default::default()
            }),
    )
    .on_press(Message::DismissCreateVariable);

    let dialog = center(opaque(container(dialog).padding(40)))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![backdrop, dialog].into()
}
