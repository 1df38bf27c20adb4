//! Label list with filter input

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};
use tidewatch_core::labels::{empty_state_text, filter_labels, Label, EMPTY_NO_LABELS};
use tidewatch_core::store::LabelsState;
use tidewatch_core::RemoteDataState;
use tidewatch_widgets::label_pill;
use tidewatch_widgets::theme::{ERROR_TEXT, HINT_TEXT};

use super::super::message::Message;

const FILTER_WIDTH: f32 = 290.0;

pub fn view<'a>(labels: &'a LabelsState, search_term: &'a str) -> Element<'a, Message> {
    let header = row![
        text_input("Filter Labels...", search_term)
            .on_input(Message::LabelsFilterChanged)
            .width(Length::Fixed(FILTER_WIDTH))
            .padding(8),
        Space::new().width(Length::Fill),
        button(text("Refresh"))
            .on_press(Message::RefreshLabels)
            .style(button::secondary),
        button(text("+ Create Label")).on_press(Message::ShowCreateLabel),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![header, body(labels, search_term)]
        .spacing(15)
        .width(Length::Fill)
        .into()
}

fn body<'a>(labels: &'a LabelsState, search_term: &'a str) -> Element<'a, Message> {
    if labels.list.is_empty() {
        match labels.status {
            RemoteDataState::NotStarted | RemoteDataState::Loading => {
                return centered(text("Loading labels...").color(HINT_TEXT).into());
            }
            RemoteDataState::Error => {
                return centered(text("Could not load labels").color(ERROR_TEXT).into());
            }
            RemoteDataState::Done => {}
        }
    }

    let mut matches = filter_labels(&labels.list, search_term);
    if matches.is_empty() {
        return empty_state(search_term);
    }
    matches.sort_by_key(|label| label.name.to_lowercase());

    let rows = matches
        .into_iter()
        .fold(Column::new().spacing(6), |col, label| col.push(label_row(label)));

    scrollable(rows).height(Length::Fill).into()
}

fn label_row(label: &Label) -> Element<'_, Message> {
    let description: Element<'_, Message> = if label.properties.description.is_empty() {
        text("No description").size(13).color(HINT_TEXT).into()
    } else {
        text(&label.properties.description).size(13).into()
    };

    let row = row![
        container(label_pill(&label.name, &label.properties.color)).width(Length::Fixed(200.0)),
        container(description).width(Length::Fill),
        button(text("Edit"))
            .on_press(Message::StartEditLabel(label.id.clone()))
            .style(button::secondary),
        button(text("Delete"))
            .on_press(Message::DeleteLabel(label.id.clone()))
            .style(button::danger),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(row).padding([6, 10]).style(container::rounded_box).into()
}

fn empty_state(search_term: &str) -> Element<'_, Message> {
    let message = empty_state_text(search_term);
    let mut content = column![text(message).color(HINT_TEXT)]
        .spacing(10)
        .align_x(Alignment::Center);

    if message == EMPTY_NO_LABELS {
        content = content.push(button(text("+ Create Label")).on_press(Message::ShowCreateLabel));
    }

    centered(content.into())
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content).center_x(Length::Fill).padding(40).into()
}
