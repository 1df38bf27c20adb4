//! Test identifier suffix conventions
//!
//! External automated suites address elements by these strings, so the
//! suffixes must stay bit-exact.

/// Default test identifier of an overlay
pub const OVERLAY: &str = "overlay";

/// `{id}--children`
pub fn children(id: &str) -> String {
    format!("{id}--children")
}

/// `{id}--container`
pub fn container(id: &str) -> String {
    format!("{id}--container")
}

/// `{id}--button`
pub fn button(id: &str) -> String {
    format!("{id}--button")
}
