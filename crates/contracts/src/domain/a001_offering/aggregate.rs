use serde::{Deserialize, Serialize};

use crate::domain::a002_partner::{PartnerRegistry, PartnerSummary};
use crate::enums::{OfferingProgram, OfferingStatus};

// Sort slot assigned to offerings without an explicit order
const DEFAULT_SORT_ORDER: i32 = 100;

// ============================================================================
// Registration call to action
// ============================================================================

/// State advertised on the registration button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationState {
    Open,
    Waitlist,
    Closed,
    InviteOnly,
}

impl RegistrationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationState::Open => "open",
            RegistrationState::Waitlist => "waitlist",
            RegistrationState::Closed => "closed",
            RegistrationState::InviteOnly => "invite-only",
        }
    }
}

/// Registration call to action attached to an offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingRegistration {
    pub label: String,

    pub url: String,

    pub state: RegistrationState,

    pub note: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One course or program offering as loaded from content front matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,

    pub title: String,

    pub program: OfferingProgram,

    pub status: OfferingStatus,

    /// Explicit position within equal-status records; lower sorts first
    pub order: Option<i32>,

    /// Slugs of partner organizations involved in this offering
    #[serde(default)]
    pub partners: Vec<String>,

    pub summary: Option<String>,

    pub lecturer: Option<String>,

    pub format: Option<String>,

    pub location: Option<String>,

    pub dates: Option<String>,

    pub duration: Option<String>,

    #[serde(rename = "cohortSlug")]
    pub cohort_slug: Option<String>,

    #[serde(rename = "heroImage")]
    pub hero_image: Option<String>,

    pub registration: Option<OfferingRegistration>,

    /// Marks records rendered in the preview rail
    #[serde(default)]
    pub preview: bool,

    /// Content path of the source document
    pub path: Option<String>,
}

impl Offering {
    /// Effective sort position; records without an explicit order share one slot
    pub fn sort_order(&self) -> i32 {
        self.order.unwrap_or(DEFAULT_SORT_ORDER)
    }

    /// Resolve partner slugs against the registry.
    /// Slugs without a registry entry are left out of the detailed list.
    pub fn with_relations(&self, partners: &PartnerRegistry) -> OfferingWithRelations {
        let partners_detailed = self
            .partners
            .iter()
            .filter_map(|slug| match partners.get(slug) {
                Some(partner) => Some(partner.clone()),
                None => {
                    log::debug!("offering '{}': unresolved partner slug '{}'", self.id, slug);
                    None
                }
            })
            .collect();

        OfferingWithRelations {
            offering: self.clone(),
            partners_detailed,
        }
    }
}

// ============================================================================
// Enriched record
// ============================================================================

/// Offering together with its resolved partner summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingWithRelations {
    #[serde(flatten)]
    pub offering: Offering,

    #[serde(rename = "partnersDetailed", default)]
    pub partners_detailed: Vec<PartnerSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(id: &str) -> Offering {
        Offering {
            id: id.to_string(),
            title: "Data Stewardship Executive Course".to_string(),
            program: OfferingProgram::Foundations,
            status: OfferingStatus::Upcoming,
            order: None,
            partners: vec![],
            summary: None,
            lecturer: None,
            format: None,
            location: None,
            dates: None,
            duration: None,
            cohort_slug: None,
            hero_image: None,
            registration: None,
            preview: false,
            path: None,
        }
    }

    fn partner(slug: &str, name: &str) -> PartnerSummary {
        PartnerSummary {
            slug: slug.to_string(),
            name: name.to_string(),
            path: format!("/partners/{}", slug),
        }
    }

    #[test]
    fn test_sort_order_defaults_without_explicit_value() {
        let mut record = offering("o-1");
        assert_eq!(record.sort_order(), 100);

        record.order = Some(5);
        assert_eq!(record.sort_order(), 5);
    }

    #[test]
    fn test_with_relations_resolves_known_slugs() {
        let registry: PartnerRegistry = vec![partner("the-govlab", "The GovLab")]
            .into_iter()
            .collect();

        let mut record = offering("o-1");
        record.partners = vec!["the-govlab".to_string(), "missing-org".to_string()];

        let enriched = record.with_relations(&registry);
        assert_eq!(enriched.partners_detailed.len(), 1);
        assert_eq!(enriched.partners_detailed[0].name, "The GovLab");
        // Raw slug list stays untouched
        assert_eq!(enriched.offering.partners.len(), 2);
    }

    #[test]
    fn test_front_matter_deserializes_with_defaults() {
        let json = serde_json::json!({
            "id": "offerings/open-data-in-action",
            "title": "Open Data in Action",
            "program": "deep-dives",
            "status": "past",
            "cohortSlug": "fall-2024",
            "registration": {
                "label": "Join the waitlist",
                "url": "https://example.org/register",
                "state": "invite-only",
                "note": null
            }
        });

        let record: Offering = serde_json::from_value(json).unwrap();
        assert_eq!(record.program, OfferingProgram::DeepDives);
        assert_eq!(record.cohort_slug.as_deref(), Some("fall-2024"));
        assert_eq!(record.order, None);
        assert!(record.partners.is_empty());
        assert!(!record.preview);
        assert_eq!(
            record.registration.map(|r| r.state),
            Some(RegistrationState::InviteOnly)
        );
    }

    #[test]
    fn test_registration_state_matches_wire_format() {
        for state in [
            RegistrationState::Open,
            RegistrationState::Waitlist,
            RegistrationState::Closed,
            RegistrationState::InviteOnly,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
    }

    #[test]
    fn test_enriched_record_flattens_on_the_wire() {
        let registry = PartnerRegistry::new();
        let enriched = offering("o-1").with_relations(&registry);

        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["id"], "o-1");
        assert_eq!(value["partnersDetailed"], serde_json::json!([]));
        assert!(value.get("offering").is_none());
    }
}
