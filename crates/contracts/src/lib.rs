//! Shared contracts for the public education site: content record shapes,
//! site-wide enums, and the pure catalog operations pages render from.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
