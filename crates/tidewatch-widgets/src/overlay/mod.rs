//! Overlay rendering
//!
//! [`overlay`] draws one frame of an overlay from its lifecycle and config.
//! The mask is always part of the tree so it can fade out while the
//! lifecycle is hiding; children are only built while rendering.
//!
//! The overlay never produces messages. Consumers close it from their own
//! controls, e.g. the dismiss button of [`overlay_heading`].

mod parts;

pub use parts::{overlay_body, overlay_container, overlay_footer, overlay_heading};

use std::time::Instant;

use iced::widget::{container, opaque, scrollable, stack, Space};
use iced::{Color, Element, Length};
use tidewatch_core::overlay::{
    OverlayBody, OverlayConfig, OverlayLayout, OverlayLifecycle, OverlayPhase,
};

/// Mask alpha at full opacity
const MASK_ALPHA: f32 = 0.6;

/// Padding around the content region
const REGION_PADDING: f32 = 40.0;

/// Render an overlay
///
/// `content` is only called while the lifecycle is rendering its children.
pub fn overlay<'a, Message, F>(
    lifecycle: &OverlayLifecycle,
    config: &OverlayConfig,
    now: Instant,
    content: F,
) -> Element<'a, Message>
where
    Message: 'a,
    F: FnOnce() -> Element<'a, Message>,
{
    let layout = OverlayLayout::plan(lifecycle, config);
    let opacity = lifecycle.chrome_opacity(now);
    let blocking = lifecycle.phase() != OverlayPhase::Hidden;

    let children: Element<'a, Message> = match layout.body {
        OverlayBody::Empty => Space::new().into(),
        OverlayBody::Custom => content(),
        OverlayBody::Contained(ref wrapper) => overlay_container(wrapper, content()),
    };

    let region = container(children)
        .center_x(Length::Fill)
        .padding(REGION_PADDING);

    let region: Element<'a, Message> = if layout.scrollable {
        scrollable(region)
            .direction(scrollable::Direction::Vertical(scrollable::Scrollbar::new()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        region.center_y(Length::Fill).into()
    };

    let mask = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, MASK_ALPHA * opacity).into()),
            ..Default::default()
        });

    if blocking {
        // Keep clicks from reaching the screen underneath
        stack![opaque(mask), opaque(region)].into()
    } else {
        stack![mask, region].into()
    }
}
