//! Label form shared by the create and update overlays

use iced::widget::{button, column, row, text, text_input, Row, Space};
use iced::{Background, Border, Element, Length};
use tidewatch_core::labels::{LabelDraft, LabelField};
use tidewatch_widgets::theme::{parse_hex_color, status_color, ERROR_TEXT, LABEL_COLOR_PRESETS};
use tidewatch_widgets::{label_pill, overlay_body, overlay_footer, overlay_heading};

use super::super::message::Message;

/// What differs between the create and update forms
pub struct FormProps {
    /// Submit stays disabled while false
    pub valid: bool,
    pub title: &'static str,
    pub submit_text: &'static str,
    pub on_field: fn(LabelField, String) -> Message,
    pub on_submit: Message,
    pub on_dismiss: Message,
    /// Existing labels keep their name
    pub name_editable: bool,
}

pub fn view<'a>(
    draft: &'a LabelDraft,
    name_error: Option<String>,
    props: FormProps,
) -> Element<'a, Message> {
    let FormProps {
        valid,
        title,
        submit_text,
        on_field,
        on_submit,
        on_dismiss,
        name_editable,
    } = props;
    let label = draft.label();

    let name_input = text_input("Name this Label", &label.name).padding(8);
    let name_input = if name_editable {
        name_input.on_input(move |value| on_field(LabelField::Name, value))
    } else {
        name_input
    };

    let mut fields = column![text("Name").size(14), name_input].spacing(8);
    // Empty names only complain once the user has typed something
    if let Some(error) = name_error.filter(|_| draft.is_dirty()) {
        fields = fields.push(text(error).size(13).color(ERROR_TEXT));
    }

    let border = status_color(draft.color_status());
    let color_input = text_input("#RRGGBB", &label.properties.color)
        .on_input(move |value| on_field(LabelField::Color, value))
        .padding(8)
        .width(Length::Fixed(120.0))
        .style(move |theme, status| {
            let mut style = text_input::default(theme, status);
            style.border.color = border;
            style
        });

    let preview_name = if label.name.is_empty() { "Label Name" } else { label.name.as_str() };

    fields = fields
        .push(text("Description").size(14))
        .push(
            text_input("Add an optional description", &label.properties.description)
                .on_input(move |value| on_field(LabelField::Description, value))
                .padding(8),
        )
        .push(text("Color").size(14))
        .push(swatches(on_field))
        .push(
            row![
                color_input,
                Space::new().width(Length::Fill),
                label_pill(preview_name, &label.properties.color),
            ]
            .spacing(10),
        );

    let actions: [Element<'a, Message>; 2] = [
        button(text("Cancel"))
            .on_press(on_dismiss.clone())
            .style(button::secondary)
            .into(),
        button(text(submit_text))
            .on_press_maybe(valid.then_some(on_submit))
            .into(),
    ];

    column![
        overlay_heading(title, Some(on_dismiss)),
        overlay_body(fields),
        overlay_footer(actions),
    ]
    .into()
}

/// One button per preset color
fn swatches<'a>(on_field: fn(LabelField, String) -> Message) -> Element<'a, Message> {
    LABEL_COLOR_PRESETS
        .iter()
        .fold(Row::new().spacing(6), |row, (_name, hex)| {
            let color = parse_hex_color(hex).unwrap_or_default();
            row.push(
                button(Space::new().width(Length::Fixed(20.0)).height(Length::Fixed(20.0)))
                    .on_press(on_field(LabelField::Color, hex.to_string()))
                    .padding(0)
                    .style(move |_theme, _status| button::Style {
                        background: Some(Background::Color(color)),
                        border: Border {
                            radius: 10.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            )
        })
        .into()
}
