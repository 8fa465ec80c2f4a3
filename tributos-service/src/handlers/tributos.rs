//! The pipeline trigger: fetch notas, compute ISS, persist tributos.

use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::CalculoTributosResponse;
use crate::models::Tributo;
use crate::services::metrics::PIPELINE_RUNS_TOTAL;
use crate::services::tax::calcular_iss;
use crate::startup::AppState;

/// Run one pipeline execution.
///
/// A source failure aborts the run and the response mirrors it. Persistence
/// trouble never does; the outcome body carries the counts instead.
pub async fn calcular_tributos(
    State(state): State<AppState>,
) -> Result<Json<CalculoTributosResponse>, AppError> {
    tracing::info!("Tributos pipeline triggered");

    let notas = match state.notas.fetch_notas().await {
        Ok(notas) => notas,
        Err(err) => {
            PIPELINE_RUNS_TOTAL
                .with_label_values(&["source_error"])
                .inc();
            return Err(err.into());
        }
    };

    tracing::info!(count = notas.len(), "Calculating ISS for each nota");
    let tributos: Vec<Tributo> = notas.iter().map(calcular_iss).collect();

    let report = state.repository.persist_all(&tributos).await;

    PIPELINE_RUNS_TOTAL.with_label_values(&["completed"]).inc();
    tracing::info!(
        attempted = report.attempted(),
        inserted = report.inserted(),
        failed = report.failed(),
        store_available = report.store_available,
        "Tributos pipeline completed"
    );

    Ok(Json(CalculoTributosResponse {
        notas_received: notas.len(),
        tributos_computed: tributos.len(),
        tributos_persisted: report.inserted(),
        tributos_failed: report.failed(),
        store_available: report.store_available,
        notas,
    }))
}
