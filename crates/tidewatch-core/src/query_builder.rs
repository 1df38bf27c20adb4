//! Query builder: bucket selection for the active query

use crate::client::SharedBucketsClient;
use crate::remote::RemoteDataState;
use crate::store::notifications::{notify, NotificationKind};
use crate::store::{run_blocking, Action, Dispatch};

/// One tag-filter row of the builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderTag {
    pub key: Option<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilderState {
    /// Buckets available to the organization
    pub buckets: Vec<String>,
    pub buckets_status: RemoteDataState,
    /// Buckets selected in the active query's builder config
    pub builder_buckets: Vec<String>,
    pub tags: Vec<BuilderTag>,
}

impl Default for QueryBuilderState {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            buckets_status: RemoteDataState::NotStarted,
            builder_buckets: Vec::new(),
            tags: vec![BuilderTag::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryBuilderAction {
    SetBuckets {
        status: RemoteDataState,
        list: Option<Vec<String>>,
    },
    SelectBucket {
        bucket: String,
        reset_selections: bool,
    },
}

pub fn set_buckets(status: RemoteDataState, list: Option<Vec<String>>) -> Action {
    Action::QueryBuilder(QueryBuilderAction::SetBuckets { status, list })
}

pub fn select_bucket(bucket: impl Into<String>, reset_selections: bool) -> Action {
    Action::QueryBuilder(QueryBuilderAction::SelectBucket {
        bucket: bucket.into(),
        reset_selections,
    })
}

impl QueryBuilderState {
    pub fn reduce(&mut self, action: QueryBuilderAction) {
        match action {
            QueryBuilderAction::SetBuckets { status, list } => {
                self.buckets_status = status;
                if let Some(list) = list {
                    self.buckets = list;
                }
            }
            QueryBuilderAction::SelectBucket { bucket, reset_selections } => {
                self.builder_buckets = vec![bucket];
                if reset_selections {
                    self.tags = vec![BuilderTag::default()];
                }
            }
        }
    }

    /// The builder's first bucket, or the first available one
    pub fn selected_bucket(&self) -> Option<&str> {
        self.builder_buckets
            .first()
            .or_else(|| self.buckets.first())
            .map(String::as_str)
    }
}

/// Fetch the organization's buckets
pub async fn get_buckets<D: Dispatch + Send>(
    client: SharedBucketsClient,
    org_id: String,
    dispatch: &mut D,
) {
    dispatch.dispatch(set_buckets(RemoteDataState::Loading, None));

    match run_blocking(client, move |c| c.get_buckets(&org_id)).await {
        Ok(buckets) => {
            log::info!("Fetched {} buckets", buckets.len());
            dispatch.dispatch(set_buckets(RemoteDataState::Done, Some(buckets)));
        }
        Err(e) => {
            log::error!("Failed to fetch buckets: {}", e);
            dispatch.dispatch(set_buckets(RemoteDataState::Error, None));
            dispatch.dispatch(notify(NotificationKind::GetBucketsFailed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoryClient, Operation};
    use crate::store::AppState;
    use std::sync::Arc;

    fn with_buckets() -> QueryBuilderState {
        let mut state = QueryBuilderState::default();
        state.reduce(QueryBuilderAction::SetBuckets {
            status: RemoteDataState::Done,
            list: Some(vec!["telegraf".into(), "_monitoring".into()]),
        });
        state
    }

    #[test]
    fn test_selected_bucket_falls_back_to_first_available() {
        let state = with_buckets();
        assert_eq!(state.selected_bucket(), Some("telegraf"));
        assert_eq!(QueryBuilderState::default().selected_bucket(), None);
    }

    #[test]
    fn test_select_bucket_resets_tags() {
        let mut state = with_buckets();
        state.tags = vec![BuilderTag { key: Some("host".into()), values: vec!["a".into()] }];

        state.reduce(QueryBuilderAction::SelectBucket {
            bucket: "_monitoring".into(),
            reset_selections: true,
        });
        assert_eq!(state.selected_bucket(), Some("_monitoring"));
        assert_eq!(state.tags, vec![BuilderTag::default()]);
    }

    #[test]
    fn test_select_bucket_can_keep_tags() {
        let mut state = with_buckets();
        let tags = vec![BuilderTag { key: Some("host".into()), values: vec![] }];
        state.tags = tags.clone();
        state.reduce(QueryBuilderAction::SelectBucket {
            bucket: "telegraf".into(),
            reset_selections: false,
        });
        assert_eq!(state.tags, tags);
    }

    #[tokio::test]
    async fn test_get_buckets() {
        let client = Arc::new(MemoryClient::with_data(Vec::new(), vec!["a".into(), "b".into()]));
        let mut state = AppState::default();
        get_buckets(client, "org".into(), &mut state).await;
        assert_eq!(state.query_builder.buckets, vec!["a", "b"]);
        assert_eq!(state.query_builder.buckets_status, RemoteDataState::Done);
    }

    #[tokio::test]
    async fn test_get_buckets_failure() {
        let client = Arc::new(MemoryClient::new());
        client.fail_next(Operation::GetBuckets, "down");
        let mut state = AppState::default();
        get_buckets(client, "org".into(), &mut state).await;
        assert_eq!(state.query_builder.buckets_status, RemoteDataState::Error);
        assert_eq!(state.notifications.list.len(), 1);
    }
}
