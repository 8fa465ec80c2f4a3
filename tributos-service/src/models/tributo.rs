//! Derived ISS tax line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tax line item headed for the `tributos` table.
///
/// `tributo_valor` stays an exact decimal for the whole pipeline and is only
/// stringified when bound at the storage boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tributo {
    pub empresa_id: String,
    pub razao_social_empresa: Option<String>,
    pub tributo_nome: String,
    pub tributo_valor: Decimal,
}
