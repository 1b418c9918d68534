//! Hero data a page publishes for the layout to render.
//!
//! The context is an explicit value owned by the host and handed to the
//! page being rendered; it is not process-global state.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One headline statistic shown in the hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

/// Call-to-action link shown in the hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLink {
    pub label: String,
    pub to: String,
}

/// Hero copy for the current page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHeroData {
    pub title: Option<String>,

    pub subtitle: Option<String>,

    pub description: Option<String>,

    pub badge: Option<String>,

    #[serde(default)]
    pub stats: Vec<HeroStat>,

    #[serde(default)]
    pub links: Vec<HeroLink>,

    /// Pages opt out of the shared hero by setting this to false
    #[serde(rename = "showHero", default = "default_true")]
    pub show_hero: bool,
}

impl Default for PageHeroData {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            description: None,
            badge: None,
            stats: vec![],
            links: vec![],
            show_hero: true,
        }
    }
}

/// Hero slot the layout reads after the page has rendered
#[derive(Debug, Clone, Default)]
pub struct PageHeroContext {
    current: Option<PageHeroData>,
}

impl PageHeroContext {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Publish hero data for the current page
    pub fn set(&mut self, data: PageHeroData) {
        self.current = Some(data);
    }

    /// Remove the published hero so the layout shows nothing
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&PageHeroData> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
