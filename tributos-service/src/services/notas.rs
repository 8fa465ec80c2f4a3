//! Client for the remote notas collection.

use axum::http::StatusCode;
use reqwest::Client;
use service_core::error::AppError;
use thiserror::Error;

use crate::models::Nota;

/// Failure kinds for one fetch of the notas collection. A non-success status
/// and an undecodable body are distinct failures; both abort the run.
#[derive(Debug, Error)]
pub enum NotasError {
    #[error("notas source returned status {0}")]
    Status(u16),

    #[error("notas source unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notas payload could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<NotasError> for AppError {
    fn from(err: NotasError) -> Self {
        match err {
            NotasError::Status(code) => AppError::UpstreamStatus(
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
            ),
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

/// HTTP client for the notas API.
#[derive(Clone)]
pub struct NotasClient {
    client: Client,
    base_url: String,
}

impl NotasClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the full notas collection. One GET, no retries, transport-default
    /// timeouts.
    pub async fn fetch_notas(&self) -> Result<Vec<Nota>, NotasError> {
        let url = format!("{}/api/Notas", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::error!(status = %status, "Notas source returned non-success status");
            return Err(NotasError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Notas payload received");

        let notas: Vec<Nota> = serde_json::from_str(&body).map_err(NotasError::Decode)?;
        tracing::info!(count = notas.len(), "Notas decoded");

        Ok(notas)
    }
}
