//! Site menu built from the route table of the public site.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Deserialize;

use super::slug::format_slug_label;

/// Default route table embedded in the binary
const DEFAULT_ROUTES: &str = r#"
routes = [
    "/",
    "/offerings",
    "/deep-dives",
    "/community",
    "/faculty",
    "/posts",
    "/contact",
]
"#;

/// One entry of the site menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub path: String,
    pub label: String,
}

/// Route table the menu is built from
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    pub routes: Vec<String>,
}

impl NavigationConfig {
    /// Parse a TOML route table
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: NavigationConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Built-in route table of the public site
    pub fn default_site() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_ROUTES)
    }
}

/// Menu label for a route path
pub fn route_label(path: &str) -> String {
    if path == "/" {
        return "Home".to_string();
    }

    let segment = path.split('/').find(|segment| !segment.is_empty());
    format_slug_label(segment)
}

/// Build the site menu from a route table.
///
/// Keeps the root and unique top-level static routes, drops internal
/// (underscore-prefixed) segments and dynamic patterns, then orders the
/// menu with the root first and the contact page last.
pub fn build_navigation(routes: &[String]) -> Vec<NavigationItem> {
    let mut seen = HashSet::new();

    let mut items: Vec<NavigationItem> = routes
        .iter()
        .filter(|path| {
            if path.is_empty() || !seen.insert(path.as_str()) {
                return false;
            }

            let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
            if path.as_str() != "/" && segments.len() != 1 {
                return false;
            }
            if segments.iter().any(|segment| segment.starts_with('_')) {
                return false;
            }
            // Dynamic and grouped route patterns never reach the menu
            if path.contains(':') || path.contains('(') {
                return false;
            }

            true
        })
        .map(|path| NavigationItem {
            path: path.clone(),
            label: route_label(path),
        })
        .collect();

    items.sort_by(|a, b| menu_position(&a.path, &b.path));

    items
}

fn menu_position(a: &str, b: &str) -> Ordering {
    menu_rank(a)
        .cmp(&menu_rank(b))
        .then_with(|| natord::compare(a, b))
}

/// Fixed slots: the root opens the menu, the contact page closes it
fn menu_rank(path: &str) -> u8 {
    match path {
        "/" => 0,
        "/contact" => 2,
        _ => 1,
    }
}
