pub mod a001_offering;
pub mod a002_partner;
