//! HTTP handlers for tributos-service.

pub mod tributos;

pub use tributos::calcular_tributos;
