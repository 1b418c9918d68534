use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Partner organization as resolved by the content loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub slug: String,
    pub name: String,
    pub path: String,
}

/// Slug-keyed lookup of resolved partners
#[derive(Debug, Clone, Default)]
pub struct PartnerRegistry {
    by_slug: HashMap<String, PartnerSummary>,
}

impl PartnerRegistry {
    pub fn new() -> Self {
        Self {
            by_slug: HashMap::new(),
        }
    }

    /// Register a partner; a repeated slug replaces the earlier entry
    pub fn insert(&mut self, partner: PartnerSummary) {
        self.by_slug.insert(partner.slug.clone(), partner);
    }

    pub fn get(&self, slug: &str) -> Option<&PartnerSummary> {
        self.by_slug.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}

impl FromIterator<PartnerSummary> for PartnerRegistry {
    fn from_iter<I: IntoIterator<Item = PartnerSummary>>(iter: I) -> Self {
        let mut registry = PartnerRegistry::new();
        for partner in iter {
            registry.insert(partner);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(slug: &str, name: &str) -> PartnerSummary {
        PartnerSummary {
            slug: slug.to_string(),
            name: name.to_string(),
            path: format!("/partners/{}", slug),
        }
    }

    #[test]
    fn test_registry_lookup_by_slug() {
        let registry: PartnerRegistry = vec![
            partner("the-govlab", "The GovLab"),
            partner("civic-hall", "Civic Hall"),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("civic-hall"));
        assert_eq!(
            registry.get("the-govlab").map(|p| p.name.as_str()),
            Some("The GovLab")
        );
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_repeated_slug_replaces_entry() {
        let mut registry = PartnerRegistry::new();
        registry.insert(partner("civic-hall", "Civic Hall"));
        registry.insert(partner("civic-hall", "Civic Hall NYC"));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("civic-hall").map(|p| p.name.as_str()),
            Some("Civic Hall NYC")
        );
    }
}
