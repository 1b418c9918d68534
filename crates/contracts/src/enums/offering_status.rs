use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferingStatus {
    Upcoming,
    Waitlist,
    Closed,
    Past,
}

impl OfferingStatus {
    /// Slug used in content front matter
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingStatus::Upcoming => "upcoming",
            OfferingStatus::Waitlist => "waitlist",
            OfferingStatus::Closed => "closed",
            OfferingStatus::Past => "past",
        }
    }

    /// Human-readable status name
    pub fn label(&self) -> &'static str {
        match self {
            OfferingStatus::Upcoming => "Upcoming",
            OfferingStatus::Waitlist => "Waitlist",
            OfferingStatus::Closed => "Closed",
            OfferingStatus::Past => "Past",
        }
    }

    /// Primary sort rank: upcoming offerings first, past offerings last
    pub fn priority(&self) -> u8 {
        match self {
            OfferingStatus::Upcoming => 0,
            OfferingStatus::Waitlist => 1,
            OfferingStatus::Closed => 2,
            OfferingStatus::Past => 3,
        }
    }

    /// All statuses in priority order
    pub fn all() -> &'static [OfferingStatus] {
        &[
            OfferingStatus::Upcoming,
            OfferingStatus::Waitlist,
            OfferingStatus::Closed,
            OfferingStatus::Past,
        ]
    }

    /// Parse a front-matter slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "upcoming" => Some(OfferingStatus::Upcoming),
            "waitlist" => Some(OfferingStatus::Waitlist),
            "closed" => Some(OfferingStatus::Closed),
            "past" => Some(OfferingStatus::Past),
            _ => None,
        }
    }
}

impl fmt::Display for OfferingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
