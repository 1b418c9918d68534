pub mod aggregate;

pub use aggregate::{PartnerRegistry, PartnerSummary};
