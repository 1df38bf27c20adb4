//! Labels screen
//!
//! Filterable list of labels plus the create and update overlays.

pub mod create_overlay;
mod form;
mod list;
pub mod update_overlay;

pub use list::view;

/// Max width of both label overlays
const FORM_MAX_WIDTH: u32 = 400;
