//! Create-variable form state
//!
//! Shown without an `OverlayLifecycle`: the form mounts and unmounts with
//! its own visibility flag.

use tidewatch_core::overlay::Visibility;
use tidewatch_core::variables::VariableDraft;

#[derive(Debug, Clone, Default)]
pub struct VariableForm {
    pub visible: Visibility,
    pub draft: VariableDraft,
    /// Set after a rejected submit; cleared on the next edit
    pub error: Option<&'static str>,
}

impl VariableForm {
    pub fn open(&mut self, initial_script: Option<&str>) {
        self.draft = VariableDraft::new(initial_script);
        self.error = None;
        self.visible = Visibility::Shown;
    }

    pub fn close(&mut self) {
        self.visible = Visibility::Hidden;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.visible.is_shown()
    }
}
