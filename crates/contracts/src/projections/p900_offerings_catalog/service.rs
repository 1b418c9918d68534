//! Pure list operations over the offering catalog.
//!
//! Pages pass loaded records through these helpers before rendering;
//! none of them mutate their input.

use std::cmp::Ordering;

use crate::domain::a001_offering::OfferingWithRelations;
use crate::enums::OfferingProgram;

use super::dto::{OfferingFilter, OfferingsByProgram};

/// Case-insensitive natural ordering for titles, with a case-sensitive
/// pass so titles equal up to case still order deterministically
fn title_order(a: &str, b: &str) -> Ordering {
    natord::compare_ignore_case(a, b).then_with(|| natord::compare(a, b))
}

/// Sort a catalog snapshot by status priority, then explicit order, then title
pub fn sort_offerings(list: &[OfferingWithRelations]) -> Vec<OfferingWithRelations> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| {
        a.offering
            .status
            .priority()
            .cmp(&b.offering.status.priority())
            .then_with(|| a.offering.sort_order().cmp(&b.offering.sort_order()))
            .then_with(|| title_order(&a.offering.title, &b.offering.title))
    });
    sorted
}

/// Keep the records matching every supplied filter field
pub fn filter_offerings_list(
    list: &[OfferingWithRelations],
    filter: &OfferingFilter,
) -> Vec<OfferingWithRelations> {
    list.iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Split records per program, each bucket sorted newest-first.
/// Every program bucket is present even when no record falls into it.
pub fn group_past_by_program(list: &[OfferingWithRelations]) -> OfferingsByProgram {
    let mut grouped = OfferingsByProgram::default();

    for item in list {
        grouped.get_mut(item.offering.program).push(item.clone());
    }

    for program in OfferingProgram::all() {
        let bucket = grouped.get_mut(*program);
        let mut sorted = sort_offerings(bucket);
        sorted.reverse();
        *bucket = sorted;
    }

    grouped
}
