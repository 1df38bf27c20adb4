//! Application store
//!
//! A single [`AppState`] is mutated only through [`Action`]s. Async thunks
//! perform remote calls and hand their results to any [`Dispatch`]
//! implementation: the state itself, a recording `Vec`, or the UI's channel.
//!
//! Failed remote calls never mutate domain state; they dispatch exactly one
//! notification instead.

pub mod labels;
pub mod notifications;

pub use labels::{LabelAction, LabelsState};
pub use notifications::{
    Notification, NotificationAction, NotificationKind, NotificationStyle, NotificationsState,
};

use std::sync::Arc;

use crate::client::{self, ClientError};
use crate::query_builder::{QueryBuilderAction, QueryBuilderState};
use crate::variables::{VariableAction, VariablesState};

/// Every state change the store understands
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Labels(LabelAction),
    Notifications(NotificationAction),
    QueryBuilder(QueryBuilderAction),
    Variables(VariableAction),
}

/// Sink for actions
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

impl Dispatch for AppState {
    fn dispatch(&mut self, action: Action) {
        self.reduce(action);
    }
}

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub labels: LabelsState,
    pub notifications: NotificationsState,
    pub query_builder: QueryBuilderState,
    pub variables: VariablesState,
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Labels(action) => self.labels.reduce(action),
            Action::Notifications(action) => self.notifications.reduce(action),
            Action::QueryBuilder(action) => self.query_builder.reduce(action),
            Action::Variables(action) => self.variables.reduce(action),
        }
    }
}

/// Run a blocking client call on tokio's blocking pool
pub(crate) async fn run_blocking<C, T, F>(client: Arc<C>, call: F) -> client::Result<T>
where
    C: ?Sized + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&C) -> client::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(client.as_ref()))
        .await
        .map_err(|e| ClientError::Join(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{Label, LabelProperties};

    #[test]
    fn test_state_dispatches_into_reducer() {
        let mut state = AppState::default();
        let label = Label::new("1", "prod", LabelProperties::default());
        state.dispatch(labels::add_label(label.clone()));
        assert_eq!(state.labels.list, vec![label]);
    }

    #[test]
    fn test_vec_records_actions() {
        let mut recorded = Vec::new();
        recorded.dispatch(labels::remove_label("1"));
        assert_eq!(recorded, vec![labels::remove_label("1")]);
    }
}
