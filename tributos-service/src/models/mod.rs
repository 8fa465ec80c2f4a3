//! Domain models for tributos-service.

mod nota;
mod tributo;

pub use nota::Nota;
pub use tributo::Tributo;
