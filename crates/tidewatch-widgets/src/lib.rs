//! Shared iced widgets for the tidewatch admin UI
//!
//! View functions take state from `tidewatch-core` plus message constructors
//! and return an `Element`; none of them own state.
//!
//! - `overlay`: modal region driven by an `OverlayLifecycle`
//! - `overlay_container` / `overlay_heading` / `overlay_body` / `overlay_footer`:
//!   layout siblings usable with or without `overlay`
//! - `status_dropdown`: pick list that reflects a remote loading status
//! - `label_pill`: colored label tag
//! - `error_boundary`: panic-catching wrapper for view functions
//! - `channel_subscription`: bridges an action channel into a `Subscription`

pub mod dropdown;
pub mod error_boundary;
pub mod overlay;
pub mod pill;
pub mod subscription;
pub mod theme;

pub use dropdown::status_dropdown;
pub use error_boundary::error_boundary;
pub use overlay::{overlay, overlay_body, overlay_container, overlay_footer, overlay_heading};
pub use pill::label_pill;
pub use subscription::channel_subscription;
pub use theme::{parse_hex_color, LABEL_COLOR_PRESETS};
