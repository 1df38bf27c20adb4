//! Query builder screen: bucket selection and the variables built from it

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};
use tidewatch_core::query_builder::QueryBuilderState;
use tidewatch_core::remote::to_component_status;
use tidewatch_core::variables::{VariableArguments, VariablesState};
use tidewatch_widgets::status_dropdown;
use tidewatch_widgets::theme::HINT_TEXT;

use super::message::Message;

/// Test identifier of the bucket dropdown
const BUCKETS_DROPDOWN: &str = "buckets";

const DROPDOWN_WIDTH: f32 = 240.0;

/// Flux query for the selected bucket
pub fn script_for(bucket: Option<&str>) -> Option<String> {
    bucket.map(|bucket| {
        format!("from(bucket: \"{}\")\n  |> range(start: v.timeRangeStart)", bucket)
    })
}

pub fn view<'a>(
    builder: &'a QueryBuilderState,
    variables: &'a VariablesState,
) -> Element<'a, Message> {
    let buckets = row![
        text("From").size(14),
        status_dropdown(
            BUCKETS_DROPDOWN,
            &builder.buckets,
            builder.selected_bucket(),
            to_component_status(builder.buckets_status),
            DROPDOWN_WIDTH,
            Message::SelectBucket,
        ),
        button(text("Refresh")).on_press(Message::RefreshBuckets).style(button::secondary),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let tags = builder
        .tags
        .iter()
        .fold(Column::new().spacing(4), |col, tag| {
            let key = tag.key.as_deref().unwrap_or("any tag");
            let values = if tag.values.is_empty() {
                String::from("no values selected")
            } else {
                tag.values.join(", ")
            };
            col.push(text(format!("Filter: {} ({})", key, values)).size(13).color(HINT_TEXT))
        });

    let script = script_for(builder.selected_bucket())
        .unwrap_or_else(|| String::from("Select a bucket to build a query"));

    let variables_list = if variables.list.is_empty() {
        column![text("No variables yet").size(13).color(HINT_TEXT)]
    } else {
        variables
            .list
            .iter()
            .fold(Column::new().spacing(4), |col, variable| {
                let VariableArguments::Query { language, .. } = &variable.arguments;
                col.push(text(format!("{} ({})", variable.name, language)).size(14))
            })
    };

    let variables_header = row![
        text("Variables").size(18),
        Space::new().width(Length::Fill),
        button(text("Create Variable")).on_press(Message::ShowCreateVariable),
    ]
    .align_y(Alignment::Center);

    column![
        text("Query Builder").size(20),
        buckets,
        tags,
        container(text(script).size(13)).padding(10).style(container::rounded_box),
        variables_header,
        variables_list,
    ]
    .spacing(15)
    .width(Length::Fill)
    .into()
}
