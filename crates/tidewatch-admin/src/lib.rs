//! tidewatch-admin - administrative UI for a time-series platform
//!
//! Label management, a query builder bucket picker and query variables,
//! all backed by the store in `tidewatch-core`.

pub mod config;
pub mod dispatch;
pub mod ui;
