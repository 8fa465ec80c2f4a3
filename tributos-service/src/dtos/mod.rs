//! Response payloads for the HTTP surface.

use serde::Serialize;

use crate::models::Nota;

/// Completion body for one pipeline run.
///
/// Persistence counts are reported alongside the fetch echo so a caller can
/// tell a fully persisted batch from one the store never saw.
#[derive(Debug, Serialize)]
pub struct CalculoTributosResponse {
    pub notas_received: usize,
    pub tributos_computed: usize,
    pub tributos_persisted: usize,
    pub tributos_failed: usize,
    pub store_available: bool,
    /// Echo of the fetched collection, as decoded.
    pub notas: Vec<Nota>,
}
