//! Search filtering for the label list

use super::Label;

pub const EMPTY_NO_MATCHES: &str = "No Labels match your search term";
pub const EMPTY_NO_LABELS: &str = "Looks like you haven't created any Labels , why not create one?";

/// Labels whose name or description contains `term`, ignoring case
pub fn filter_labels<'a>(labels: &'a [Label], term: &str) -> Vec<&'a Label> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return labels.iter().collect();
    }

    labels
        .iter()
        .filter(|l| {
            l.name.to_lowercase().contains(&term)
                || l.properties.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Copy shown when the filtered list is empty
pub fn empty_state_text(search_term: &str) -> &'static str {
    if search_term.is_empty() {
        EMPTY_NO_LABELS
    } else {
        EMPTY_NO_MATCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelProperties;

    fn labels() -> Vec<Label> {
        vec![
            Label::new("1", "Production", LabelProperties::new("customer facing", "#f00")),
            Label::new("2", "staging", LabelProperties::new("pre-release PRODUCT builds", "#0f0")),
            Label::new("3", "dev", LabelProperties::new("", "#00f")),
        ]
    }

    #[test]
    fn test_matches_name_and_description() {
        let all = labels();
        let ids: Vec<&str> = filter_labels(&all, "prod").iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let all = labels();
        assert_eq!(filter_labels(&all, "  ").len(), 3);
    }

    #[test]
    fn test_empty_state_copy() {
        assert_eq!(empty_state_text(""), EMPTY_NO_LABELS);
        assert_eq!(empty_state_text("zzz"), EMPTY_NO_MATCHES);
    }
}
