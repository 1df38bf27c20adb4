//! Label message handlers
//!
//! Handles: RefreshLabels, Show/Dismiss/Submit for the create and edit
//! overlays, form field edits, DeleteLabel

use std::time::Instant;

use iced::Task;
use tidewatch_core::labels::{LabelDraft, LabelField};
use tidewatch_core::store::labels::{create_label, delete_label, get_labels, update_label};
use tidewatch_widgets::theme::default_label_color;

use super::super::app::AdminApp;
use super::super::labels::{create_overlay, update_overlay};
use super::super::message::Message;

impl AdminApp {
    /// Fetch every label into the store
    pub(crate) fn fetch_labels(&self) -> Task<Message> {
        let client = self.labels_client.clone();
        let mut dispatch = self.dispatcher.clone();
        Self::run_thunk("get_labels", async move {
            get_labels(client, &mut dispatch).await;
        })
    }

    pub fn handle_show_create_label(&mut self, now: Instant) -> Task<Message> {
        self.labels
            .create
            .open(LabelDraft::blank(default_label_color()), now);
        Task::none()
    }

    pub fn handle_dismiss_create_label(&mut self, now: Instant) -> Task<Message> {
        self.labels.create.close(now);
        Task::none()
    }

    pub fn handle_create_label_field(&mut self, field: LabelField, value: String) -> Task<Message> {
        if let Some(draft) = self.labels.create.draft.as_mut() {
            draft.set_field(field, value);
        }
        Task::none()
    }

    /// Create the drafted label and close the form
    pub fn handle_submit_create_label(&mut self, now: Instant) -> Task<Message> {
        let Some(draft) = self.labels.create.draft.as_ref() else {
            return Task::none();
        };

        if !create_overlay::submit_enabled(draft, &self.store.labels.list) {
            log::debug!("Create label submitted while invalid, ignoring");
            return Task::none();
        }

        let label = draft.clone().into_label();
        self.labels.create.close(now);

        let client = self.labels_client.clone();
        let mut dispatch = self.dispatcher.clone();
        let name = label.name.trim().to_string();
        Self::run_thunk("create_label", async move {
            create_label(client, name, label.properties, &mut dispatch).await;
        })
    }

    pub fn handle_start_edit_label(&mut self, id: &str, now: Instant) -> Task<Message> {
        match self.store.labels.get(id) {
            Some(label) => self.labels.edit.open(LabelDraft::from_label(label), now),
            None => log::warn!("Cannot edit label {}: not in store", id),
        }
        Task::none()
    }

    pub fn handle_dismiss_edit_label(&mut self, now: Instant) -> Task<Message> {
        self.labels.edit.close(now);
        Task::none()
    }

    pub fn handle_edit_label_field(&mut self, field: LabelField, value: String) -> Task<Message> {
        if let Some(draft) = self.labels.edit.draft.as_mut() {
            draft.set_field(field, value);
        }
        Task::none()
    }

    /// Send the edited properties and close the form without waiting
    pub fn handle_submit_edit_label(&mut self, now: Instant) -> Task<Message> {
        let Some(draft) = self.labels.edit.draft.as_ref() else {
            return Task::none();
        };

        if !update_overlay::submit_enabled(draft, &self.store.labels.list) {
            log::debug!("Update label submitted while invalid, ignoring");
            return Task::none();
        }

        let id = draft.base().id.clone();
        let properties = draft.label().properties.clone();
        self.labels.edit.close(now);

        let client = self.labels_client.clone();
        let mut dispatch = self.dispatcher.clone();
        Self::run_thunk("update_label", async move {
            update_label(client, id, properties, &mut dispatch).await;
        })
    }

    pub fn handle_delete_label(&mut self, id: String) -> Task<Message> {
        let client = self.labels_client.clone();
        let mut dispatch = self.dispatcher.clone();
        Self::run_thunk("delete_label", async move {
            delete_label(client, id, &mut dispatch).await;
        })
    }
}
