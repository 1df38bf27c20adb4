//! Message handlers organized by feature
//!
//! Each sub-module provides `handle_*` methods on `AdminApp`.

pub mod labels;
pub mod query_builder;
pub mod store;
pub mod variables;
