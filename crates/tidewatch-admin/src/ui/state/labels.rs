//! Labels screen state

use std::time::{Duration, Instant};

use tidewatch_core::labels::LabelDraft;
use tidewatch_core::overlay::{OverlayLifecycle, Visibility};

/// A label form shown in an overlay
///
/// The draft outlives `close` until the lifecycle suspends the overlay's
/// children, so the form stays on screen while the overlay fades out.
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    pub lifecycle: OverlayLifecycle,
    pub draft: Option<LabelDraft>,
}

impl LabelOverlay {
    pub fn new(hide_delay: Duration, now: Instant) -> Self {
        Self {
            lifecycle: OverlayLifecycle::with_delay(Visibility::Hidden, hide_delay, now),
            draft: None,
        }
    }

    pub fn open(&mut self, draft: LabelDraft, now: Instant) {
        self.draft = Some(draft);
        self.lifecycle.set_visible(Visibility::Shown, now);
    }

    pub fn close(&mut self, now: Instant) {
        self.lifecycle.set_visible(Visibility::Hidden, now);
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle.visibility().is_shown()
    }

    /// Drop the draft once the overlay has finished hiding
    pub fn tick(&mut self, now: Instant) {
        if self.lifecycle.tick(now) {
            self.draft = None;
        }
    }

    /// Id of the label the open form edits
    pub fn editing_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.base().id.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LabelsScreen {
    pub search_term: String,
    pub create: LabelOverlay,
    pub edit: LabelOverlay,
}

impl LabelsScreen {
    pub fn new(hide_delay: Duration, now: Instant) -> Self {
        Self {
            search_term: String::new(),
            create: LabelOverlay::new(hide_delay, now),
            edit: LabelOverlay::new(hide_delay, now),
        }
    }

    pub fn has_pending_hide(&self) -> bool {
        self.create.lifecycle.has_pending_hide() || self.edit.lifecycle.has_pending_hide()
    }

    pub fn tick(&mut self, now: Instant) {
        self.create.tick(now);
        self.edit.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewatch_core::labels::{Label, LabelProperties};
    use tidewatch_core::overlay::RenderState;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_draft_survives_until_hide_completes() {
        let t0 = Instant::now();
        let mut overlay = LabelOverlay::new(ms(300), t0);
        let label = Label::new("7", "prod", LabelProperties::new("", "#326BBA"));

        overlay.open(LabelDraft::from_label(&label), t0);
        assert_eq!(overlay.editing_id(), Some("7"));

        overlay.close(t0 + ms(10));
        overlay.tick(t0 + ms(200));
        assert!(overlay.draft.is_some());
        assert_eq!(overlay.lifecycle.render_state(), RenderState::Rendering);

        overlay.tick(t0 + ms(310));
        assert!(overlay.draft.is_none());
        assert!(!overlay.lifecycle.has_pending_hide());
    }

    #[test]
    fn test_reopen_before_delay_keeps_new_draft() {
        let t0 = Instant::now();
        let mut overlay = LabelOverlay::new(ms(300), t0);
        let a = Label::new("a", "a", LabelProperties::default());
        let b = Label::new("b", "b", LabelProperties::default());

        overlay.open(LabelDraft::from_label(&a), t0);
        overlay.close(t0 + ms(50));
        overlay.open(LabelDraft::from_label(&b), t0 + ms(100));
        overlay.tick(t0 + ms(1000));

        assert!(overlay.is_open());
        assert_eq!(overlay.editing_id(), Some("b"));
    }
}
