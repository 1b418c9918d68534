//! Offerings page meta document: hero copy, search panel, preview rail
//! and call-to-action blocks edited alongside the offering records.

use serde::{Deserialize, Serialize};

/// Link rendered inside a meta section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaLink {
    pub label: String,
    pub to: String,
}

/// Hero block of the offerings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaHero {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub ctas: Vec<MetaLink>,
}

/// One selectable control of the search panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFilterDef {
    pub key: String,
    pub label: String,
    pub component: Option<String>,
}

/// Search panel definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaSearch {
    pub heading: Option<String>,
    #[serde(default)]
    pub filters: Vec<MetaFilterDef>,
}

/// Preview rail heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaPreview {
    pub heading: Option<String>,
}

/// Closing call-to-action block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaCta {
    pub primary: Option<MetaLink>,
    pub secondary: Option<MetaLink>,
}

/// Testimonial selection for the offerings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTestimonials {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Meta document of the offerings page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingsMeta {
    pub title: Option<String>,
    pub hero: Option<MetaHero>,
    pub search: Option<MetaSearch>,
    pub preview: Option<MetaPreview>,
    pub cta: Option<MetaCta>,
    pub testimonials: Option<MetaTestimonials>,
}
