pub mod aggregate;
pub mod meta;

pub use aggregate::{Offering, OfferingRegistration, OfferingWithRelations, RegistrationState};
pub use meta::OfferingsMeta;
