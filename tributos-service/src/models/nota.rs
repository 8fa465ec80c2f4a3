//! Nota fiscal wire model, as served by the notas API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One invoice record from the remote notas collection.
///
/// `valor` is taken as reported; a negative value is valid input here and
/// propagates unchanged through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nota {
    pub nota_id: i64,
    pub prestador_id: i64,
    pub tomador_id: i64,
    pub razao_social_prestador: Option<String>,
    pub razao_social_tomador: Option<String>,
    pub valor: Decimal,
}
