//! In-process client used offline and in tests

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{BucketsClient, ClientError, LabelsClient, Result};
use crate::labels::{Label, LabelProperties};

/// Remote operation, used to target injected failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetLabels,
    CreateLabel,
    UpdateLabel,
    DeleteLabel,
    GetBuckets,
}

#[derive(Debug, Default)]
struct Inner {
    labels: Vec<Label>,
    buckets: Vec<String>,
    next_id: u64,
    /// One-shot failures, consumed by the next call of that operation
    failures: HashMap<Operation, String>,
}

/// Thread-safe in-memory implementation of the client traits
#[derive(Debug, Default)]
pub struct MemoryClient {
    inner: Mutex<Inner>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with labels and bucket names
    pub fn with_data(labels: Vec<Label>, buckets: Vec<String>) -> Self {
        let next_id = labels.len() as u64;
        Self {
            inner: Mutex::new(Inner {
                labels,
                buckets,
                next_id,
                failures: HashMap::new(),
            }),
        }
    }

    /// Make the next call of `operation` fail with `message`
    pub fn fail_next(&self, operation: Operation, message: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failures.insert(operation, message.into());
        }
    }

    /// Snapshot of the stored labels
    pub fn labels(&self) -> Vec<Label> {
        self.inner
            .lock()
            .map(|inner| inner.labels.clone())
            .unwrap_or_default()
    }

    fn begin(&self, operation: Operation) -> Result<MutexGuard<'_, Inner>> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ClientError::Rejected("memory client state poisoned".to_string()))?;
        match inner.failures.remove(&operation) {
            Some(message) => Err(ClientError::Rejected(message)),
            None => Ok(inner),
        }
    }
}

impl LabelsClient for MemoryClient {
    fn get_all(&self) -> Result<Vec<Label>> {
        let inner = self.begin(Operation::GetLabels)?;
        Ok(inner.labels.clone())
    }

    fn create(&self, name: &str, properties: &LabelProperties) -> Result<Label> {
        let mut inner = self.begin(Operation::CreateLabel)?;
        if inner.labels.iter().any(|l| l.name == name) {
            return Err(ClientError::Rejected(format!(
                "label with name {} already exists",
                name
            )));
        }

        inner.next_id += 1;
        let label = Label::new(format!("{:016x}", inner.next_id), name, properties.clone());
        inner.labels.push(label.clone());
        Ok(label)
    }

    fn update(&self, id: &str, properties: &LabelProperties) -> Result<Label> {
        let mut inner = self.begin(Operation::UpdateLabel)?;
        let label = inner
            .labels
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        label.properties = properties.clone();
        Ok(label.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.begin(Operation::DeleteLabel)?;
        let before = inner.labels.len();
        inner.labels.retain(|l| l.id != id);
        if inner.labels.len() == before {
            return Err(ClientError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl BucketsClient for MemoryClient {
    fn get_buckets(&self, _org_id: &str) -> Result<Vec<String>> {
        let inner = self.begin(Operation::GetBuckets)?;
        Ok(inner.buckets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_ids_and_rejects_duplicates() {
        let client = MemoryClient::new();
        let a = client.create("a", &LabelProperties::default()).unwrap();
        let b = client.create("b", &LabelProperties::default()).unwrap();
        assert_ne!(a.id, b.id);
        assert!(matches!(
            client.create("a", &LabelProperties::default()),
            Err(ClientError::Rejected(_))
        ));
    }

    #[test]
    fn test_injected_failure_is_one_shot() {
        let client = MemoryClient::new();
        client.fail_next(Operation::GetLabels, "offline");
        assert_eq!(client.get_all(), Err(ClientError::Rejected("offline".into())));
        assert_eq!(client.get_all(), Ok(Vec::new()));
    }

    #[test]
    fn test_update_and_delete_missing() {
        let client = MemoryClient::new();
        assert_eq!(
            client.update("nope", &LabelProperties::default()),
            Err(ClientError::NotFound("nope".into()))
        );
        assert_eq!(client.delete("nope"), Err(ClientError::NotFound("nope".into())));
    }

    #[test]
    fn test_update_replaces_properties() {
        let client = MemoryClient::new();
        let label = client.create("a", &LabelProperties::new("old", "#000")).unwrap();
        let updated = client
            .update(&label.id, &LabelProperties::new("new", "#fff"))
            .unwrap();
        assert_eq!(updated.properties.description, "new");
        assert_eq!(client.labels()[0].properties.color, "#fff");
    }
}
