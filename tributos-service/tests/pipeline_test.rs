//! Pipeline integration tests: fetch → transform → persist → response.
//!
//! The notas API is played by an in-process stub. The store URL points at a
//! closed port: a run with an unreachable store must still complete and
//! report zero persisted rows, so these suites need no live database.

mod common;

use axum::http::StatusCode;
use common::{spawn_notas_stub, TestApp};
use reqwest::Client;

const NOTAS_BODY: &str = r#"[
    {"notaId": 1, "prestadorId": 7, "tomadorId": 21, "razaoSocialPrestador": "Acme", "razaoSocialTomador": "Globex", "valor": 200.00},
    {"notaId": 2, "prestadorId": 9, "tomadorId": 22, "razaoSocialPrestador": null, "razaoSocialTomador": null, "valor": 1000.00}
]"#;

#[tokio::test]
async fn source_failure_mirrors_upstream_status_with_empty_body() {
    let stub = spawn_notas_stub(StatusCode::SERVICE_UNAVAILABLE, "down").await;
    let app = TestApp::spawn(&stub).await;

    let response = Client::new()
        .get(format!("{}/calcular-tributos", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 503);
    assert!(response
        .text()
        .await
        .expect("Failed to read body")
        .is_empty());
}

#[tokio::test]
async fn undecodable_body_is_a_bad_gateway() {
    // Missing the required valor field.
    let stub = spawn_notas_stub(
        StatusCode::OK,
        r#"[{"notaId": 1, "prestadorId": 2, "tomadorId": 3}]"#,
    )
    .await;
    let app = TestApp::spawn(&stub).await;

    let response = Client::new()
        .get(format!("{}/calcular-tributos", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 502);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .expect("Missing error field")
        .contains("decoded"));
}

#[tokio::test]
async fn unreachable_store_still_completes_with_zero_persisted() {
    let stub = spawn_notas_stub(StatusCode::OK, NOTAS_BODY).await;
    let app = TestApp::spawn(&stub).await;

    let response = Client::new()
        .get(format!("{}/calcular-tributos", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["notas_received"], 2);
    assert_eq!(body["tributos_computed"], 2);
    assert_eq!(body["tributos_persisted"], 0);
    assert_eq!(body["tributos_failed"], 0);
    assert_eq!(body["store_available"], false);
}

#[tokio::test]
async fn completion_body_echoes_the_fetched_notas_in_order() {
    let stub = spawn_notas_stub(StatusCode::OK, NOTAS_BODY).await;
    let app = TestApp::spawn(&stub).await;

    let response = Client::new()
        .post(format!("{}/calcular-tributos", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let notas = body["notas"].as_array().expect("Missing notas echo");
    assert_eq!(notas.len(), 2);
    assert_eq!(notas[0]["notaId"], 1);
    assert_eq!(notas[0]["razaoSocialPrestador"], "Acme");
    assert_eq!(notas[1]["notaId"], 2);
    assert_eq!(notas[1]["razaoSocialPrestador"], serde_json::Value::Null);
}

#[tokio::test]
async fn empty_collection_completes_with_nothing_to_persist() {
    let stub = spawn_notas_stub(StatusCode::OK, "[]").await;
    let app = TestApp::spawn(&stub).await;

    let response = Client::new()
        .get(format!("{}/calcular-tributos", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["notas_received"], 0);
    assert_eq!(body["tributos_computed"], 0);
}
