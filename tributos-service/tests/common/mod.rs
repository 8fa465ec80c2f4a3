use axum::{http::StatusCode, routing::get, Router};
use secrecy::Secret;
use tributos_service::config::{Config, DatabaseConfig, NotasSourceConfig, ServerConfig};
use tributos_service::startup::Application;

/// Connection string pointing nowhere; opens fail fast.
pub const UNREACHABLE_DATABASE_URL: &str = "postgres://127.0.0.1:1/tributos";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at the given notas API and
    /// at a store that cannot be reached.
    pub async fn spawn(notas_base_url: &str) -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            source: NotasSourceConfig {
                base_url: notas_base_url.to_string(),
            },
            database: DatabaseConfig {
                url: Secret::new(UNREACHABLE_DATABASE_URL.to_string()),
            },
            service_name: "tributos-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

/// Spawn an in-process stand-in for the notas API answering `GET /api/Notas`
/// with a fixed status and body. Returns its base URL.
pub async fn spawn_notas_stub(status: StatusCode, body: &str) -> String {
    let body = body.to_string();
    let handler = move || {
        let body = body.clone();
        async move { (status, body) }
    };

    let router = Router::new().route("/api/Notas", get(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind notas stub");
    let port = listener
        .local_addr()
        .expect("Notas stub has no local addr")
        .port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://127.0.0.1:{}", port)
}
