//! Create-label overlay

use std::time::Instant;

use iced::widget::Space;
use iced::Element;
use tidewatch_core::labels::{names_for_create, validate_label_uniqueness, Label, LabelDraft};
use tidewatch_core::overlay::{OverlayConfig, OverlayPhase};
use tidewatch_widgets::overlay;

use super::form::{self, FormProps};
use super::FORM_MAX_WIDTH;
use crate::ui::message::Message;
use crate::ui::state::LabelOverlay;

/// `None` once the overlay has fully hidden
pub fn view<'a>(
    state: &'a LabelOverlay,
    labels: &'a [Label],
    now: Instant,
) -> Option<Element<'a, Message>> {
    if state.lifecycle.phase() == OverlayPhase::Hidden {
        return None;
    }

    let config = OverlayConfig::default()
        .max_width(FORM_MAX_WIDTH)
        .test_id("create-label--overlay");

    Some(overlay(&state.lifecycle, &config, now, || match &state.draft {
        Some(draft) => {
            let names = names_for_create(labels);
            let name_error = validate_label_uniqueness(&names, &draft.label().name);
            form::view(
                draft,
                name_error,
                FormProps {
                    valid: submit_enabled(draft, labels),
                    title: "Create Label",
                    submit_text: "Create Label",
                    on_field: Message::CreateLabelField,
                    on_submit: Message::SubmitCreateLabel,
                    on_dismiss: Message::DismissCreateLabel,
                    name_editable: true,
                },
            )
        }
        None => Space::new().into(),
    }))
}

/// Whether the draft can be created next to `labels`
pub fn submit_enabled(draft: &LabelDraft, labels: &[Label]) -> bool {
    let names = names_for_create(labels);
    draft.is_valid(|name| validate_label_uniqueness(&names, name))
}
