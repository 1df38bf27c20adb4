//! Colored label tag

use iced::widget::{container, text};
use iced::{Border, Color, Element};

use crate::theme::parse_hex_color;

/// Fallback swatch when the label color does not parse
const FALLBACK: Color = Color::from_rgb(0.33, 0.34, 0.4);

pub fn label_pill<'a, Message: 'a>(name: &'a str, color: &str) -> Element<'a, Message> {
    let background = parse_hex_color(color).unwrap_or(FALLBACK);
    let text_color = contrast_text(background);

    container(text(name).size(13).color(text_color))
        .padding([2, 10])
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Black or white, whichever reads better on `background`
fn contrast_text(background: Color) -> Color {
    let luminance = 0.299 * background.r + 0.587 * background.g + 0.114 * background.b;
    if luminance > 0.6 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
