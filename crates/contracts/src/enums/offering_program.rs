use std::fmt;

use serde::{Deserialize, Serialize};

/// Program family an offering belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferingProgram {
    Foundations,
    DeepDives,
    Community,
    Organizational,
}

impl OfferingProgram {
    /// Slug used in content front matter and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingProgram::Foundations => "foundations",
            OfferingProgram::DeepDives => "deep-dives",
            OfferingProgram::Community => "community",
            OfferingProgram::Organizational => "organizational",
        }
    }

    /// Human-readable program name
    pub fn label(&self) -> &'static str {
        match self {
            OfferingProgram::Foundations => "Foundations",
            OfferingProgram::DeepDives => "Deep Dives",
            OfferingProgram::Community => "Community",
            OfferingProgram::Organizational => "Organizational",
        }
    }

    /// All programs in display order
    pub fn all() -> &'static [OfferingProgram] {
        &[
            OfferingProgram::Foundations,
            OfferingProgram::DeepDives,
            OfferingProgram::Community,
            OfferingProgram::Organizational,
        ]
    }

    /// Parse a front-matter slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "foundations" => Some(OfferingProgram::Foundations),
            "deep-dives" => Some(OfferingProgram::DeepDives),
            "community" => Some(OfferingProgram::Community),
            "organizational" => Some(OfferingProgram::Organizational),
            _ => None,
        }
    }
}

impl fmt::Display for OfferingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for program in OfferingProgram::all() {
            assert_eq!(OfferingProgram::from_slug(program.as_str()), Some(*program));
        }
        assert_eq!(OfferingProgram::from_slug("workshops"), None);
    }

    #[test]
    fn test_labels_are_display_names() {
        assert_eq!(OfferingProgram::Foundations.label(), "Foundations");
        assert_eq!(OfferingProgram::DeepDives.label(), "Deep Dives");
        assert_eq!(OfferingProgram::Community.label(), "Community");
        assert_eq!(OfferingProgram::Organizational.label(), "Organizational");
    }

    #[test]
    fn test_wire_format_is_kebab_case() {
        let json = serde_json::to_string(&OfferingProgram::DeepDives).unwrap();
        assert_eq!(json, "\"deep-dives\"");

        let parsed: OfferingProgram = serde_json::from_str("\"organizational\"").unwrap();
        assert_eq!(parsed, OfferingProgram::Organizational);
    }
}
