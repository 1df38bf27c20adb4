//! Dropdown that follows a remote loading status
//!
//! Selectable only while the status is interactive; otherwise the button
//! shows why it is not (loading, failed, nothing to pick). Selections are
//! logged under the dropdown's `{test_id}--button` identifier.

use iced::widget::{container, pick_list, text};
use iced::{Border, Element, Length};
use tidewatch_core::overlay::test_id;
use tidewatch_core::remote::ComponentStatus;

use crate::theme::{status_color, HINT_TEXT};

/// Button text shown instead of the pick list
pub fn status_placeholder(status: ComponentStatus, has_options: bool) -> Option<&'static str> {
    match status {
        ComponentStatus::Loading => Some("Loading..."),
        ComponentStatus::Error => Some("Failed to load"),
        ComponentStatus::Disabled => Some("Not loaded"),
        ComponentStatus::Default | ComponentStatus::Valid if !has_options => Some("None available"),
        ComponentStatus::Default | ComponentStatus::Valid => None,
    }
}

pub fn status_dropdown<'a, Message, F>(
    id: &str,
    options: &[String],
    selected: Option<&str>,
    status: ComponentStatus,
    width: f32,
    on_select: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(String) -> Message + 'a,
{
    if let Some(label) = status_placeholder(status, !options.is_empty()) {
        let border = status_color(status);
        return container(text(label).size(14).color(HINT_TEXT))
            .padding([5, 10])
            .width(Length::Fixed(width))
            .style(move |_theme| container::Style {
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            })
            .into();
    }

    let button_id = test_id::button(id);
    let on_select = move |value: String| {
        log::debug!("{}: selected '{}'", button_id, value);
        on_select(value)
    };

    pick_list(options.to_vec(), selected.map(str::to_string), on_select)
        .width(Length::Fixed(width))
        .text_size(14)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_placeholder() {
        assert_eq!(status_placeholder(ComponentStatus::Loading, true), Some("Loading..."));
        assert_eq!(status_placeholder(ComponentStatus::Error, true), Some("Failed to load"));
        assert_eq!(status_placeholder(ComponentStatus::Default, false), Some("None available"));
        assert_eq!(status_placeholder(ComponentStatus::Default, true), None);
    }
}
