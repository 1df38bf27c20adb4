//! User interface for tidewatch-admin

pub mod app;
pub mod handlers;
pub mod labels;
pub mod message;
pub mod notifications;
pub mod query_builder;
pub mod state;
pub mod variables;

pub use app::AdminApp;
pub use message::Message;
