//! Application messages

use std::time::Instant;

use tidewatch_core::labels::LabelField;
use tidewatch_core::store::Action;

use super::state::View;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SwitchView(View),

    // Store
    /// Action sent by an async task through the dispatch channel
    Dispatch(Action),
    /// An async task has dispatched everything it will
    TaskFinished(&'static str),
    /// Frame tick while overlays are hiding or notifications are shown
    Tick(Instant),

    // Labels
    RefreshLabels,
    LabelsFilterChanged(String),
    ShowCreateLabel,
    DismissCreateLabel,
    CreateLabelField(LabelField, String),
    SubmitCreateLabel,
    StartEditLabel(String),
    DismissEditLabel,
    EditLabelField(LabelField, String),
    SubmitEditLabel,
    DeleteLabel(String),

    // Query builder
    RefreshBuckets,
    SelectBucket(String),

    // Variables
    ShowCreateVariable,
    DismissCreateVariable,
    VariableNameChanged(String),
    VariableScriptChanged(String),
    SubmitVariable,

    // Notifications
    DismissNotification(u64),
}
