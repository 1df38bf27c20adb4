//! Screen state owned by the application
//!
//! The store holds canonical data; these structs hold what only a screen
//! cares about (filters, open overlays, form drafts).

pub mod labels;
pub mod variables;

pub use labels::{LabelOverlay, LabelsScreen};
pub use variables::VariableForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Labels,
    QueryBuilder,
}
