//! Overlay visibility and exit-animation lifecycle
//!
//! Callers own a two-value [`Visibility`] flag. The overlay owns whether its
//! children are mounted ([`RenderState`]), which lags the flag on hide so the
//! exit transition can finish before the content disappears.
//!
//! ```text
//!            show                 derive
//!  Hidden ─────────► Showing ───────────────► Shown
//!    ▲                  ▲                       │
//!    │ deadline         │ show (cancel timer)   │ hide (arm timer)
//!    │                  │                       ▼
//!    └──────────────────┴─────────────────── Hiding
//! ```

mod lifecycle;
pub mod layout;
pub mod test_id;

pub use layout::{ContainerLayout, OverlayBody, OverlayConfig, OverlayLayout};
pub use lifecycle::{OverlayLifecycle, OverlayPhase, HIDE_DELAY};

/// Caller-facing visibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// Build from a plain boolean
    pub fn from_shown(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// Whether the overlay's children are mounted
///
/// Derived internally from visibility transitions over time; callers can read
/// it but never set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    Rendering,
    Suspended,
}

impl RenderState {
    pub fn is_rendering(self) -> bool {
        matches!(self, RenderState::Rendering)
    }
}
