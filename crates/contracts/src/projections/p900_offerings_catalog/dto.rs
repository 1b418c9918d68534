use serde::{Deserialize, Serialize};

use crate::domain::a001_offering::OfferingWithRelations;
use crate::enums::{OfferingProgram, OfferingStatus};

/// Catalog filter; a field left empty matches every record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingFilter {
    #[serde(default)]
    pub program: Option<OfferingProgram>,
    #[serde(default)]
    pub status: Option<OfferingStatus>,
    /// Partner slug the record must list
    #[serde(default)]
    pub partner: Option<String>,
}

impl OfferingFilter {
    /// True when every supplied field matches the record
    pub fn matches(&self, item: &OfferingWithRelations) -> bool {
        if let Some(program) = self.program {
            if item.offering.program != program {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.offering.status != status {
                return false;
            }
        }

        if let Some(partner) = &self.partner {
            if !item.offering.partners.iter().any(|slug| slug == partner) {
                return false;
            }
        }

        true
    }

    /// True when no field constrains the list
    pub fn is_empty(&self) -> bool {
        self.program.is_none() && self.status.is_none() && self.partner.is_none()
    }
}

/// Past offerings split per program; every program bucket is always present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingsByProgram {
    #[serde(default)]
    pub foundations: Vec<OfferingWithRelations>,

    #[serde(rename = "deep-dives", default)]
    pub deep_dives: Vec<OfferingWithRelations>,

    #[serde(default)]
    pub community: Vec<OfferingWithRelations>,

    #[serde(default)]
    pub organizational: Vec<OfferingWithRelations>,
}

impl OfferingsByProgram {
    /// Bucket for one program
    pub fn get(&self, program: OfferingProgram) -> &[OfferingWithRelations] {
        match program {
            OfferingProgram::Foundations => &self.foundations,
            OfferingProgram::DeepDives => &self.deep_dives,
            OfferingProgram::Community => &self.community,
            OfferingProgram::Organizational => &self.organizational,
        }
    }

    pub(crate) fn get_mut(&mut self, program: OfferingProgram) -> &mut Vec<OfferingWithRelations> {
        match program {
            OfferingProgram::Foundations => &mut self.foundations,
            OfferingProgram::DeepDives => &mut self.deep_dives,
            OfferingProgram::Community => &mut self.community,
            OfferingProgram::Organizational => &mut self.organizational,
        }
    }

    /// Buckets paired with their program, in display order
    pub fn iter(&self) -> impl Iterator<Item = (OfferingProgram, &[OfferingWithRelations])> + '_ {
        OfferingProgram::all()
            .iter()
            .map(move |program| (*program, self.get(*program)))
    }

    /// Record count across all buckets
    pub fn total(&self) -> usize {
        OfferingProgram::all()
            .iter()
            .map(|program| self.get(*program).len())
            .sum()
    }
}
