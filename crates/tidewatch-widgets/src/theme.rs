//! Shared theme constants
//!
//! Label swatches and status colors used across screens.

use iced::Color;
use tidewatch_core::remote::ComponentStatus;
use tidewatch_core::store::NotificationStyle;

/// Preset label colors offered by the label form: (name, hex)
pub const LABEL_COLOR_PRESETS: [(&str, &str); 8] = [
    ("Ocean", "#326BBA"),
    ("Pool", "#22ADF6"),
    ("Rainforest", "#4ED8A0"),
    ("Star", "#7A65F2"),
    ("Fire", "#DC4E58"),
    ("Curacao", "#F95F53"),
    ("Pineapple", "#FFB94A"),
    ("Graphite", "#545667"),
];

/// Default color for a new label
pub fn default_label_color() -> &'static str {
    LABEL_COLOR_PRESETS[0].1
}

/// Muted text color for hints
pub const HINT_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Inline validation message color
pub const ERROR_TEXT: Color = Color::from_rgb(0.9, 0.3, 0.3);

/// Parse `#rgb` / `#rrggbb` into a color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match digits.len() {
        3 => {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?),
        _ => return None,
    };

    Some(Color::from_rgb8(r, g, b))
}

/// Border color of an input in a given status
pub fn status_color(status: ComponentStatus) -> Color {
    match status {
        ComponentStatus::Error => ERROR_TEXT,
        ComponentStatus::Valid => Color::from_rgb(0.3, 0.8, 0.5),
        ComponentStatus::Loading => Color::from_rgb(0.3, 0.6, 0.9),
        ComponentStatus::Disabled => HINT_TEXT,
        ComponentStatus::Default => Color::from_rgb(0.35, 0.35, 0.4),
    }
}

pub fn notification_color(style: NotificationStyle) -> Color {
    match style {
        NotificationStyle::Error => Color::from_rgb(0.75, 0.2, 0.25),
    }
}
