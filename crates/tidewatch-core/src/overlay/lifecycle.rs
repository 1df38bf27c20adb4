//! Overlay lifecycle state machine
//!
//! Input events (`receive`) are processed synchronously and followed by a
//! derivation pass (`derive`) before anything is rendered. The only deferred
//! transition is the hide deadline, which the owner advances with `tick`.

use std::time::{Duration, Instant};

use super::{RenderState, Visibility};

/// Delay between a `Shown -> Hidden` transition and unmounting the children
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

/// Internal phase of an overlay
///
/// Collapsed to [`Visibility`] for callers; `Showing` only exists between an
/// input event and the derivation pass that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    Showing,
    Shown,
    Hiding,
}

/// Visibility state and exit-animation timing for one overlay instance
#[derive(Debug, Clone)]
pub struct OverlayLifecycle {
    visible: Visibility,
    render: RenderState,
    phase: OverlayPhase,
    delay: Duration,
    /// The single pending hide timer, if any
    hide_deadline: Option<Instant>,
}

impl OverlayLifecycle {
    /// Create a lifecycle using the default [`HIDE_DELAY`]
    pub fn new(visible: Visibility, now: Instant) -> Self {
        Self::with_delay(visible, HIDE_DELAY, now)
    }

    /// Create a lifecycle with a custom hide delay
    ///
    /// Children start suspended whatever `visible` is; the derivation pass
    /// runs before returning so an initially shown overlay is already
    /// rendering when the first frame is built.
    pub fn with_delay(visible: Visibility, delay: Duration, now: Instant) -> Self {
        let mut lifecycle = Self {
            visible: Visibility::Hidden,
            render: RenderState::Suspended,
            phase: OverlayPhase::Hidden,
            delay,
            hide_deadline: None,
        };
        lifecycle.set_visible(visible, now);
        lifecycle
    }

    /// Process a new `visible` value and derive the render-state from it
    pub fn set_visible(&mut self, visible: Visibility, now: Instant) {
        self.receive(visible, now);
        self.derive();
    }

    /// Record a `visible` input event without deriving
    pub fn receive(&mut self, visible: Visibility, now: Instant) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        match visible {
            Visibility::Shown => {
                if self.hide_deadline.take().is_some() {
                    log::debug!("overlay: shown again, pending hide cancelled");
                }
                self.phase = OverlayPhase::Showing;
            }
            Visibility::Hidden => {
                // Re-armed, never accumulated
                self.hide_deadline = Some(now + self.delay);
                self.phase = OverlayPhase::Hiding;
            }
        }
    }

    /// Synchronous derivation pass
    pub fn derive(&mut self) {
        if self.visible.is_shown() {
            self.render = RenderState::Rendering;
            self.phase = OverlayPhase::Shown;
        }
    }

    /// Fire the pending hide once its deadline has passed
    ///
    /// Returns `true` when the render-state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_deadline {
            Some(deadline) if now >= deadline => {
                self.hide_deadline = None;
                self.phase = OverlayPhase::Hidden;
                let changed = self.render != RenderState::Suspended;
                self.render = RenderState::Suspended;
                if changed {
                    log::debug!("overlay: exit transition finished, children suspended");
                }
                changed
            }
            _ => false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visible
    }

    pub fn render_state(&self) -> RenderState {
        self.render
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn has_pending_hide(&self) -> bool {
        self.hide_deadline.is_some()
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }

    /// Opacity of the overlay chrome (0.0 - 1.0)
    ///
    /// Fully opaque while shown, fades linearly over the hide delay.
    pub fn chrome_opacity(&self, now: Instant) -> f32 {
        match (self.phase, self.hide_deadline) {
            (OverlayPhase::Shown | OverlayPhase::Showing, _) => 1.0,
            (OverlayPhase::Hiding, Some(deadline)) if !self.delay.is_zero() => {
                let remaining = deadline.saturating_duration_since(now);
                (remaining.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

impl Default for OverlayLifecycle {
    fn default() -> Self {
        Self::new(Visibility::Hidden, Instant::now())
    }
}
