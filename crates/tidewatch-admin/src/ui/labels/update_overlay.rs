//! Update-label overlay
//!
//! The name is fixed; only properties are sent on save.

use std::time::Instant;

use iced::widget::Space;
use iced::Element;
use tidewatch_core::labels::{names_for_edit, validate_label_uniqueness, Label, LabelDraft};
use tidewatch_core::overlay::{OverlayConfig, OverlayPhase};
use tidewatch_widgets::overlay;

use super::form::{self, FormProps};
use super::FORM_MAX_WIDTH;
use crate::ui::message::Message;
use crate::ui::state::LabelOverlay;

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
        .test_id("edit-label--overlay");

    Some(overlay(&state.lifecycle, &config, now, || match &state.draft {
        Some(draft) => {
            let names = names_for_edit(labels, &draft.base().id);
            let name_error = validate_label_uniqueness(&names, &draft.label().name);
            form::view(
                draft,
                name_error,
                FormProps {
                    valid: submit_enabled(draft, labels),
                    title: "Edit Label",
                    submit_text: "Save Changes",
                    on_field: Message::EditLabelField,
                    on_submit: Message::SubmitEditLabel,
                    on_dismiss: Message::DismissEditLabel,
                    name_editable: false,
                },
            )
        }
        None => Space::new().into(),
    }))
}

/// Whether the draft can be saved; its own current name never collides
pub fn submit_enabled(draft: &LabelDraft, labels: &[Label]) -> bool {
    let names = names_for_edit(labels, &draft.base().id);
    draft.is_valid(|name| validate_label_uniqueness(&names, name))
}
