//! ISS computation over notas.

use rust_decimal::Decimal;

use crate::models::{Nota, Tributo};

/// The only tax rule implemented today.
pub const TRIBUTO_NOME_ISS: &str = "ISS";

/// ISS rate applied to every nota: 5%.
fn aliquota() -> Decimal {
    Decimal::new(5, 2)
}

/// Map one nota to its ISS tax line item.
///
/// Total function: every nota yields exactly one tributo, negative values
/// included. The multiplication is fixed-point decimal, so round monetary
/// amounts stay round.
pub fn calcular_iss(nota: &Nota) -> Tributo {
    Tributo {
        empresa_id: nota.prestador_id.to_string(),
        razao_social_empresa: nota.razao_social_prestador.clone(),
        tributo_nome: TRIBUTO_NOME_ISS.to_string(),
        tributo_valor: nota.valor * aliquota(),
    }
}
