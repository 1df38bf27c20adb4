//! Query builder message handlers
//!
//! Handles: RefreshBuckets, SelectBucket

use iced::Task;
use tidewatch_core::query_builder::{get_buckets, select_bucket};

use super::super::app::AdminApp;
use super::super::message::Message;

impl AdminApp {
    /// Fetch the organization's buckets into the store
    pub(crate) fn fetch_buckets(&self) -> Task<Message> {
        let client = self.buckets_client.clone();
        let org_id = self.config.api.org_id.clone();
        let mut dispatch = self.dispatcher.clone();
        Self::run_thunk("get_buckets", async move {
            get_buckets(client, org_id, &mut dispatch).await;
        })
    }

    /// Make `bucket` the query's only bucket and clear tag selections
    pub fn handle_select_bucket(&mut self, bucket: String) -> Task<Message> {
        log::info!("Selected bucket '{}'", bucket);
        self.store.reduce(select_bucket(bucket, true));
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, Config};
    use std::time::Instant;
    use tidewatch_core::query_builder::{set_buckets, BuilderTag};
    use tidewatch_core::RemoteDataState;

    #[test]
    fn test_select_bucket_resets_tags() {
        let mut config = Config::default();
        config.api.backend = Backend::Memory;
        let mut app = AdminApp::with_config(config, Instant::now());

        let buckets = vec!["_monitoring".to_string(), "telegraf".to_string()];
        let _ = app.handle_dispatch(set_buckets(RemoteDataState::Done, Some(buckets)));
        app.store.query_builder.tags = vec![BuilderTag {
            key: Some("host".into()),
            values: vec!["a".into()],
        }];

        let _ = app.handle_select_bucket("telegraf".into());

        assert_eq!(app.store.query_builder.selected_bucket(), Some("telegraf"));
        assert_eq!(app.store.query_builder.tags, vec![BuilderTag::default()]);
    }
}
