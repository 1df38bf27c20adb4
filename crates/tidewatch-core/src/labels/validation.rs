//! Pure validation for label forms
//!
//! Validators return an inline message instead of an error; the caller keeps
//! the submit button disabled while one is present.

use super::Label;
use crate::remote::ComponentStatus;

pub const NAME_REQUIRED: &str = "Label name is required";
pub const DUPLICATE_NAME: &str = "There is already a label with that name";

/// Check a candidate name against the names it must not collide with
///
/// Comparison ignores case and surrounding whitespace.
pub fn validate_label_uniqueness<S: AsRef<str>>(names: &[S], candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Some(NAME_REQUIRED.to_string());
    }

    let candidate = candidate.to_lowercase();
    let taken = names
        .iter()
        .any(|name| name.as_ref().trim().to_lowercase() == candidate);

    taken.then(|| DUPLICATE_NAME.to_string())
}

/// Comparison set when creating: every existing name
pub fn names_for_create(labels: &[Label]) -> Vec<String> {
    labels.iter().map(|l| l.name.clone()).collect()
}

/// Comparison set when editing: every name except the edited label's own
pub fn names_for_edit(labels: &[Label], editing_id: &str) -> Vec<String> {
    labels
        .iter()
        .filter(|l| l.id != editing_id)
        .map(|l| l.name.clone())
        .collect()
}

/// Status of a hex color input (`#rgb` or `#rrggbb`)
pub fn validate_hex_color(color: &str) -> ComponentStatus {
    let color = color.trim();
    if color.is_empty() {
        return ComponentStatus::Default;
    }

    let valid = color
        .strip_prefix('#')
        .filter(|hex| hex.len() == 3 || hex.len() == 6)
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        ComponentStatus::Valid
    } else {
        ComponentStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelProperties;

    fn labels() -> Vec<Label> {
        vec![
            Label::new("id-a", "a", LabelProperties::default()),
            Label::new("id-b", "b", LabelProperties::default()),
        ]
    }

    #[test]
    fn test_editing_own_name_passes() {
        let names = names_for_edit(&labels(), "id-b");
        assert_eq!(validate_label_uniqueness(&names, "b"), None);
    }

    #[test]
    fn test_editing_into_other_name_fails() {
        let names = names_for_edit(&labels(), "id-b");
        assert_eq!(
            validate_label_uniqueness(&names, "a").as_deref(),
            Some(DUPLICATE_NAME)
        );
    }

    #[test]
    fn test_create_checks_all_names() {
        let names = names_for_create(&labels());
        assert!(validate_label_uniqueness(&names, "b").is_some());
        assert!(validate_label_uniqueness(&names, "c").is_none());
    }

    #[test]
    fn test_comparison_ignores_case_and_padding() {
        let names = ["Production"];
        assert!(validate_label_uniqueness(&names, "  production ").is_some());
    }

    #[test]
    fn test_blank_name_required() {
        let names: [&str; 0] = [];
        assert_eq!(validate_label_uniqueness(&names, "   ").as_deref(), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(validate_hex_color(""), ComponentStatus::Default);
        assert_eq!(validate_hex_color("#326BBA"), ComponentStatus::Valid);
        assert_eq!(validate_hex_color("#fff"), ComponentStatus::Valid);
        assert_eq!(validate_hex_color("326BBA"), ComponentStatus::Error);
        assert_eq!(validate_hex_color("#32ZBBA"), ComponentStatus::Error);
        assert_eq!(validate_hex_color("#3266"), ComponentStatus::Error);
    }
}
