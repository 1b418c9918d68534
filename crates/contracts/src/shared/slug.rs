//! Slug formatting helpers shared by navigation and display code.

/// Turn a hyphen-separated slug into a title-case label.
///
/// "deep-dives" becomes "Deep Dives"; an absent value yields an empty string.
pub fn format_slug_label(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    value
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leaving the rest of the segment as written
fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_slug_label() {
        assert_eq!(format_slug_label(Some("deep-dives")), "Deep Dives");
        assert_eq!(format_slug_label(Some("community")), "Community");
        assert_eq!(format_slug_label(Some("the-govlab")), "The Govlab");
    }

    #[test]
    fn test_format_slug_label_empty_inputs() {
        assert_eq!(format_slug_label(None), "");
        assert_eq!(format_slug_label(Some("")), "");
    }

    #[test]
    fn test_format_slug_label_drops_empty_segments() {
        assert_eq!(format_slug_label(Some("data--stewardship")), "Data Stewardship");
        assert_eq!(format_slug_label(Some("-leading-dash")), "Leading Dash");
    }

    #[test]
    fn test_capitalize_keeps_inner_casing() {
        assert_eq!(format_slug_label(Some("ai-for-NGOs")), "Ai For NGOs");
    }
}
