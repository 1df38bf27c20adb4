//! Label actions, reducer and remote thunks

use super::notifications::{notify, NotificationKind};
use super::{run_blocking, Action, Dispatch};
use crate::client::SharedLabelsClient;
use crate::labels::{Label, LabelProperties};
use crate::remote::RemoteDataState;

#[derive(Debug, Clone, PartialEq)]
pub enum LabelAction {
    /// Replace the list (when given) and set the loading status
    SetLabels {
        status: RemoteDataState,
        list: Option<Vec<Label>>,
    },
    AddLabel(Label),
    EditLabel(Label),
    RemoveLabel(String),
}

pub fn set_labels(status: RemoteDataState, list: Option<Vec<Label>>) -> Action {
    Action::Labels(LabelAction::SetLabels { status, list })
}

pub fn add_label(label: Label) -> Action {
    Action::Labels(LabelAction::AddLabel(label))
}

pub fn edit_label(label: Label) -> Action {
    Action::Labels(LabelAction::EditLabel(label))
}

pub fn remove_label(id: impl Into<String>) -> Action {
    Action::Labels(LabelAction::RemoveLabel(id.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelsState {
    pub status: RemoteDataState,
    pub list: Vec<Label>,
}

impl LabelsState {
    pub fn reduce(&mut self, action: LabelAction) {
        match action {
            LabelAction::SetLabels { status, list } => {
                self.status = status;
                if let Some(list) = list {
                    self.list = list;
                }
            }
            LabelAction::AddLabel(label) => self.list.push(label),
            LabelAction::EditLabel(label) => {
                if let Some(existing) = self.list.iter_mut().find(|l| l.id == label.id) {
                    *existing = label;
                }
            }
            LabelAction::RemoveLabel(id) => self.list.retain(|l| l.id != id),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Label> {
        self.list.iter().find(|l| l.id == id)
    }
}

/// Fetch every label, replacing the list
pub async fn get_labels<D: Dispatch + Send>(client: SharedLabelsClient, dispatch: &mut D) {
    dispatch.dispatch(set_labels(RemoteDataState::Loading, None));

    match run_blocking(client, |c| c.get_all()).await {
        Ok(labels) => {
            log::info!("Fetched {} labels", labels.len());
            dispatch.dispatch(set_labels(RemoteDataState::Done, Some(labels)));
        }
        Err(e) => {
            log::error!("Failed to fetch labels: {}", e);
            dispatch.dispatch(set_labels(RemoteDataState::Error, None));
            dispatch.dispatch(notify(NotificationKind::GetLabelsFailed));
        }
    }
}

pub async fn create_label<D: Dispatch + Send>(
    client: SharedLabelsClient,
    name: String,
    properties: LabelProperties,
    dispatch: &mut D,
) {
    match run_blocking(client, move |c| c.create(&name, &properties)).await {
        Ok(label) => {
            log::info!("Created label '{}' ({})", label.name, label.id);
            dispatch.dispatch(add_label(label));
        }
        Err(e) => {
            log::error!("Failed to create label: {}", e);
            dispatch.dispatch(notify(NotificationKind::CreateLabelFailed));
        }
    }
}

pub async fn update_label<D: Dispatch + Send>(
    client: SharedLabelsClient,
    id: String,
    properties: LabelProperties,
    dispatch: &mut D,
) {
    match run_blocking(client, move |c| c.update(&id, &properties)).await {
        Ok(label) => {
            log::info!("Updated label '{}' ({})", label.name, label.id);
            dispatch.dispatch(edit_label(label));
        }
        Err(e) => {
            log::error!("Failed to update label: {}", e);
            dispatch.dispatch(notify(NotificationKind::UpdateLabelFailed));
        }
    }
}

pub async fn delete_label<D: Dispatch + Send>(
    client: SharedLabelsClient,
    id: String,
    dispatch: &mut D,
) {
    let target = id.clone();
    match run_blocking(client, move |c| c.delete(&target)).await {
        Ok(()) => {
            log::info!("Deleted label {}", id);
            dispatch.dispatch(remove_label(id));
        }
        Err(e) => {
            log::error!("Failed to delete label {}: {}", id, e);
            dispatch.dispatch(notify(NotificationKind::DeleteLabelFailed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoryClient, Operation};
    use crate::store::AppState;
    use std::sync::Arc;

    fn seeded() -> (Arc<MemoryClient>, AppState) {
        let labels = vec![
            Label::new("1", "prod", LabelProperties::new("Production", "#326BBA")),
            Label::new("2", "dev", LabelProperties::new("Development", "#22ADF6")),
        ];
        let client = Arc::new(MemoryClient::with_data(labels.clone(), Vec::new()));
        let mut state = AppState::default();
        state.reduce(set_labels(RemoteDataState::Done, Some(labels)));
        (client, state)
    }

    fn count(state: &AppState, kind: NotificationKind) -> usize {
        state.notifications.list.iter().filter(|n| n.kind == kind).count()
    }

    #[test]
    fn test_reducer_mutations() {
        let mut state = LabelsState::default();
        let a = Label::new("a", "a", LabelProperties::default());
        let b = Label::new("b", "b", LabelProperties::default());

        state.reduce(LabelAction::SetLabels {
            status: RemoteDataState::Done,
            list: Some(vec![a.clone()]),
        });
        state.reduce(LabelAction::AddLabel(b.clone()));
        assert_eq!(state.list, vec![a.clone(), b.clone()]);

        let mut b2 = b.clone();
        b2.properties.color = "#000".into();
        state.reduce(LabelAction::EditLabel(b2.clone()));
        assert_eq!(state.get("b"), Some(&b2));

        state.reduce(LabelAction::RemoveLabel("a".into()));
        assert_eq!(state.list, vec![b2]);
    }

    #[test]
    fn test_set_labels_without_list_keeps_list() {
        let mut state = LabelsState::default();
        let a = Label::new("a", "a", LabelProperties::default());
        state.reduce(LabelAction::SetLabels {
            status: RemoteDataState::Done,
            list: Some(vec![a.clone()]),
        });
        state.reduce(LabelAction::SetLabels { status: RemoteDataState::Error, list: None });
        assert_eq!(state.status, RemoteDataState::Error);
        assert_eq!(state.list, vec![a]);
    }

    #[tokio::test]
    async fn test_get_labels_dispatches_loading_then_done() {
        let (client, _) = seeded();
        let mut recorded = Vec::new();
        get_labels(client, &mut recorded).await;

        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], set_labels(RemoteDataState::Loading, None));
        assert!(matches!(
            &recorded[1],
            Action::Labels(LabelAction::SetLabels {
                status: RemoteDataState::Done,
                list: Some(list),
            }) if list.len() == 2
        ));
    }

    #[tokio::test]
    async fn test_get_labels_failure_keeps_list() {
        let (client, mut state) = seeded();
        let before = state.labels.list.clone();
        client.fail_next(Operation::GetLabels, "offline");

        get_labels(client, &mut state).await;

        assert_eq!(state.labels.status, RemoteDataState::Error);
        assert_eq!(state.labels.list, before);
        assert_eq!(count(&state, NotificationKind::GetLabelsFailed), 1);
    }

    #[tokio::test]
    async fn test_create_label_appends() {
        let (client, mut state) = seeded();
        create_label(client, "stage".into(), LabelProperties::new("", "#fff"), &mut state).await;
        assert_eq!(state.labels.list.len(), 3);
        assert_eq!(state.labels.list[2].name, "stage");
    }

    #[tokio::test]
    async fn test_create_failure_leaves_store_and_notifies_once() {
        let (client, mut state) = seeded();
        let before = state.labels.clone();
        client.fail_next(Operation::CreateLabel, "rejected");
        create_label(client, "stage".into(), LabelProperties::new("", "#fff"), &mut state).await;
        assert_eq!(state.labels, before);
        assert_eq!(count(&state, NotificationKind::CreateLabelFailed), 1);
        assert_eq!(state.notifications.list.len(), 1);
    }

    #[tokio::test]
    async fn test_update_label_replaces_by_id() {
        let (client, mut state) = seeded();
        let properties = LabelProperties::new("Dev boxes", "#000000");
        update_label(client, "2".into(), properties, &mut state).await;
        let label = state.labels.get("2").unwrap();
        assert_eq!(label.properties.description, "Dev boxes");
        assert_eq!(state.labels.list[0].id, "1");
    }

    #[tokio::test]
    async fn test_update_failure_leaves_store_and_notifies_once() {
        let (client, mut state) = seeded();
        let before = state.labels.clone();
        client.fail_next(Operation::UpdateLabel, "rejected");

        update_label(client, "1".into(), LabelProperties::new("x", "#000"), &mut state).await;

        assert_eq!(state.labels, before);
        assert_eq!(count(&state, NotificationKind::UpdateLabelFailed), 1);
        assert_eq!(state.notifications.list.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_label_removes_by_id() {
        let (client, mut state) = seeded();
        delete_label(client.clone(), "1".into(), &mut state).await;
        assert_eq!(state.labels.list.len(), 1);
        assert_eq!(client.labels().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_label_notifies() {
        let (client, mut state) = seeded();
        delete_label(client, "404".into(), &mut state).await;
        assert_eq!(state.labels.list.len(), 2);
        assert_eq!(count(&state, NotificationKind::DeleteLabelFailed), 1);
    }
}
