//! Persistence for computed tributos.
//!
//! Every batch opens its own store connection, runs one insert per item, and
//! closes the connection afterwards. Nothing is pooled or shared across runs.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use sqlx::{Connection, PgConnection};

use crate::models::Tributo;
use crate::services::metrics::TRIBUTOS_PERSISTED_TOTAL;

/// Destination store for tributo rows.
#[async_trait]
pub trait TributoStore {
    async fn insert_tributo(&mut self, tributo: &Tributo) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl TributoStore for PgConnection {
    async fn insert_tributo(&mut self, tributo: &Tributo) -> Result<(), sqlx::Error> {
        // Values are always bound, never spliced into the statement text.
        // The decimal is stringified here and nowhere earlier.
        sqlx::query(
            r#"
            INSERT INTO tributos (empresa_id, razao_social_empresa, tributo_nome, tributo_valor)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&tributo.empresa_id)
        .bind(&tributo.razao_social_empresa)
        .bind(&tributo.tributo_nome)
        .bind(tributo.tributo_valor.to_string())
        .execute(self)
        .await?;

        Ok(())
    }
}

/// Outcome of one insert attempt.
#[derive(Debug)]
pub enum PersistOutcome {
    Inserted,
    Failed { cause: String },
}

/// Aggregate result of one persistence batch.
#[derive(Debug)]
pub struct PersistReport {
    /// False when the store connection could not be opened; no inserts were
    /// attempted in that case.
    pub store_available: bool,
    /// Per-item outcomes, in batch order.
    pub outcomes: Vec<PersistOutcome>,
}

impl PersistReport {
    pub fn unavailable() -> Self {
        Self {
            store_available: false,
            outcomes: Vec::new(),
        }
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, PersistOutcome::Inserted))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.inserted()
    }
}

/// Writes tributo batches to the destination store.
#[derive(Clone)]
pub struct TributoRepository {
    database_url: Secret<String>,
}

impl TributoRepository {
    pub fn new(database_url: Secret<String>) -> Self {
        Self { database_url }
    }

    /// Persist a batch. A connection that cannot be opened is logged and
    /// reported, not propagated; insert failures are isolated per item. The
    /// connection is released whether or not every insert succeeded.
    pub async fn persist_all(&self, tributos: &[Tributo]) -> PersistReport {
        let mut conn = match PgConnection::connect(self.database_url.expose_secret()).await {
            Ok(conn) => {
                tracing::info!("Connection to tributos store opened");
                conn
            }
            Err(err) => {
                tracing::error!(error = %err, "Connection to tributos store failed to open");
                return PersistReport::unavailable();
            }
        };

        let report = persist_with(&mut conn, tributos).await;

        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "Closing tributos store connection failed");
        }

        report
    }
}

/// Insert each tributo on the given store, one statement per item. A failed
/// insert is recorded and the batch keeps going; there is no transaction and
/// no compensating action.
pub(crate) async fn persist_with<S: TributoStore + Send>(
    store: &mut S,
    tributos: &[Tributo],
) -> PersistReport {
    let mut outcomes = Vec::with_capacity(tributos.len());

    for tributo in tributos {
        match store.insert_tributo(tributo).await {
            Ok(()) => {
                tracing::info!(empresa_id = %tributo.empresa_id, "Insert into tributos succeeded");
                TRIBUTOS_PERSISTED_TOTAL
                    .with_label_values(&["inserted"])
                    .inc();
                outcomes.push(PersistOutcome::Inserted);
            }
            Err(err) => {
                tracing::error!(
                    empresa_id = %tributo.empresa_id,
                    error = %err,
                    "Insert into tributos failed"
                );
                TRIBUTOS_PERSISTED_TOTAL
                    .with_label_values(&["failed"])
                    .inc();
                outcomes.push(PersistOutcome::Failed {
                    cause: err.to_string(),
                });
            }
        }
    }

    PersistReport {
        store_available: true,
        outcomes,
    }
}
