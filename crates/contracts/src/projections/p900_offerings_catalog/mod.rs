pub mod dto;
pub mod service;

pub use dto::{OfferingFilter, OfferingsByProgram};
pub use service::{filter_offerings_list, group_past_by_program, sort_offerings};
