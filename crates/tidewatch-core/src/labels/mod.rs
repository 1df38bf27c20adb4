//! Labels: named, colored tags attachable to other platform resources
//!
//! The canonical list lives in the store; forms work on a [`LabelDraft`]
//! taken from it while an overlay is open.

mod draft;
mod filter;
mod validation;

pub use draft::{LabelDraft, LabelField};
pub use filter::{empty_state_text, filter_labels, EMPTY_NO_LABELS, EMPTY_NO_MATCHES};
pub use validation::{
    names_for_create, names_for_edit, validate_hex_color, validate_label_uniqueness,
    DUPLICATE_NAME, NAME_REQUIRED,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Properties bag of a label
///
/// `description` and `color` are always present; any other keys the API
/// returns are kept in `extra` so an update never drops them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelProperties {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl LabelProperties {
    pub fn new(description: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            color: color.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: LabelProperties,
}

impl Label {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        properties: LabelProperties,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            properties,
        }
    }
}
