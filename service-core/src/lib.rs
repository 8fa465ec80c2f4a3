//! service-core: Shared infrastructure for the tributos pipeline services.
pub mod error;
pub mod observability;
