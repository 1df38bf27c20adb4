//! Store message handlers
//!
//! Handles: Dispatch, Tick, DismissNotification

use std::time::Instant;

use iced::Task;
use tidewatch_core::store::notifications::dismiss;
use tidewatch_core::store::{Action, NotificationAction};

use super::super::app::AdminApp;
use super::super::message::Message;

impl AdminApp {
    /// Reduce an action sent by an async task
    pub fn handle_dispatch(&mut self, action: Action) -> Task<Message> {
        let touches_labels = matches!(action, Action::Labels(_));
        self.store.reduce(action);

        if touches_labels {
            self.reconcile_edit_draft(Instant::now());
        }
        Task::none()
    }

    /// Keep the open edit form in line with the canonical label
    fn reconcile_edit_draft(&mut self, now: Instant) {
        if !self.labels.edit.is_open() {
            return;
        }
        let Some(id) = self.labels.edit.editing_id().map(str::to_string) else {
            return;
        };

        match self.store.labels.get(&id) {
            Some(canonical) => {
                if let Some(draft) = self.labels.edit.draft.as_mut() {
                    if draft.reconcile(canonical) {
                        log::info!("Edit form for label {} reloaded from store", id);
                    }
                }
            }
            None => {
                log::warn!("Label {} was removed while being edited, closing form", id);
                self.labels.edit.close(now);
            }
        }
    }

    /// Advance overlay hide timers and expire notifications
    pub fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.labels.tick(now);

        if !self.store.notifications.is_empty() {
            self.store
                .reduce(Action::Notifications(NotificationAction::Expire(now)));
        }
        Task::none()
    }

    pub fn handle_dismiss_notification(&mut self, id: u64) -> Task<Message> {
        self.store.reduce(dismiss(id));
        Task::none()
    }
}
