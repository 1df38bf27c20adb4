//! Transient editable copy of a label

use super::validation::validate_hex_color;
use super::{Label, LabelProperties};
use crate::remote::ComponentStatus;

/// Editable field of a label form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Name,
    Description,
    Color,
}

/// A label being edited inside an overlay
///
/// Remembers the canonical label it was taken from so changes to the store
/// can be detected while the overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDraft {
    base: Label,
    label: Label,
    color_status: ComponentStatus,
}

impl LabelDraft {
    /// Start editing an existing label
    pub fn from_label(label: &Label) -> Self {
        Self {
            base: label.clone(),
            label: label.clone(),
            color_status: ComponentStatus::Default,
        }
    }

    /// Start a new, unsaved label with a preset color
    pub fn blank(color: &str) -> Self {
        let label = Label::new("", "", LabelProperties::new("", color));
        Self::from_label(&label)
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn base(&self) -> &Label {
        &self.base
    }

    pub fn color_status(&self) -> ComponentStatus {
        self.color_status
    }

    /// Change one field
    ///
    /// Property edits copy the bag and replace a single key, so every sibling
    /// property and the id carry over unchanged.
    pub fn set_field(&mut self, field: LabelField, value: String) {
        match field {
            LabelField::Name => self.label.name = value,
            LabelField::Description => {
                self.label.properties = LabelProperties {
                    description: value,
                    ..self.label.properties.clone()
                };
            }
            LabelField::Color => {
                self.color_status = validate_hex_color(&value);
                self.label.properties = LabelProperties {
                    color: value,
                    ..self.label.properties.clone()
                };
            }
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.label != self.base
    }

    /// Name validation message, if any
    pub fn name_error<F>(&self, validate_name: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        validate_name(&self.label.name)
    }

    /// Whether the form may be submitted
    pub fn is_valid<F>(&self, validate_name: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        self.name_error(validate_name).is_none()
            && self.color_status.is_interactive()
            && !self.label.properties.color.trim().is_empty()
    }

    /// Follow the canonical label when it changes underneath the draft
    ///
    /// Unsaved edits are discarded in that case. Returns `true` when the draft
    /// was replaced.
    pub fn reconcile(&mut self, canonical: &Label) -> bool {
        if *canonical == self.base {
            return false;
        }
        if self.is_dirty() {
            log::warn!(
                "Label '{}' changed while being edited, discarding unsaved edits",
                canonical.id
            );
        }
        *self = Self::from_label(canonical);
        true
    }

    pub fn into_label(self) -> Label {
        self.label
    }
}
