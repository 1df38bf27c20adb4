//! Core state for the tidewatch administrative UI
//!
//! Nothing in this crate depends on a GUI toolkit. It provides:
//!
//! 1. **Overlay lifecycle**: the visibility / exit-animation state machine
//!    behind every modal dialog, plus the layout plan the widget layer renders.
//!
//! 2. **Domain**: labels, query-builder buckets and variables, with the pure
//!    validation and draft-editing rules the forms rely on.
//!
//! 3. **Store**: a single reducer-driven application state, the async action
//!    thunks that talk to the platform API, and user-facing notifications.

pub mod client;
pub mod labels;
pub mod overlay;
pub mod query_builder;
pub mod remote;
pub mod store;
pub mod variables;

pub use labels::{Label, LabelDraft, LabelField, LabelProperties};
pub use overlay::{
    OverlayConfig, OverlayLayout, OverlayLifecycle, OverlayPhase, RenderState, Visibility,
};
pub use remote::{ComponentStatus, RemoteDataState};
pub use store::{Action, AppState, Dispatch};
