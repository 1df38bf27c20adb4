//! Remote platform API clients
//!
//! The traits abstract the transport so the action layer can run against the
//! REST API ([`HttpClient`]) or an in-process store ([`MemoryClient`]).
//! Calls are blocking; the action thunks move them onto tokio's blocking pool.

mod http;
mod memory;

pub use http::HttpClient;
pub use memory::{MemoryClient, Operation};

use std::sync::Arc;
use thiserror::Error;

use crate::labels::{Label, LabelProperties};

/// Errors returned by the remote clients
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Label not found: {0}")]
    NotFound(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Background task failed: {0}")]
    Join(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Label CRUD against the platform
pub trait LabelsClient: Send + Sync {
    fn get_all(&self) -> Result<Vec<Label>>;

    fn create(&self, name: &str, properties: &LabelProperties) -> Result<Label>;

    fn update(&self, id: &str, properties: &LabelProperties) -> Result<Label>;

    fn delete(&self, id: &str) -> Result<()>;
}

/// Bucket listing for the query builder
pub trait BucketsClient: Send + Sync {
    fn get_buckets(&self, org_id: &str) -> Result<Vec<String>>;
}

pub type SharedLabelsClient = Arc<dyn LabelsClient>;
pub type SharedBucketsClient = Arc<dyn BucketsClient>;
