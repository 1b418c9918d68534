pub mod offering_program;
pub mod offering_status;

// Re-exports
pub use offering_program::OfferingProgram;
pub use offering_status::OfferingStatus;
