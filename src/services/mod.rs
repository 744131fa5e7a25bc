pub mod countries;
pub mod in_memory;
pub mod submission;
pub mod wire;

pub use countries::{fallback_countries, Country, CountryDirectory, CountryLookup, StaticCountryLookup};
pub use in_memory::{
    InMemoryRegistrationBackend, RegistrationStatus, UniquenessCheck, UploadedBrochure,
};
pub use submission::{RegistrationSubmitter, SubmissionFailure, SubmissionReceipt};
pub use wire::{field_errors_from_wire, field_from_wire_key, WireErrorResponse, WireRegistration};
