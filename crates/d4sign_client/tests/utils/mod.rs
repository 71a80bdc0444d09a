use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use d4sign_client::{D4SignClient, D4SignConfig, D4SignCredentials};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

pub const TOKEN_API: &str = "test_token";
pub const CRYPT_KEY: &str = "test_crypt";

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("tokenAPI").map(String::as_str) == Some(TOKEN_API)
        && params.get("cryptKey").map(String::as_str) == Some(CRYPT_KEY)
}

fn page(params: &HashMap<String, String>) -> u32 {
    params.get("pg").and_then(|pg| pg.parse().ok()).unwrap_or(1)
}

async fn handle_safes(Query(params): Params) -> Response {
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }
    Json(json!([
        { "uuid_safe": "s1", "name-safe": "Contracts" },
        { "name-safe": "safe without id" },
        { "uuid_safe": "s2", "name-safe": "HR" }
    ]))
    .into_response()
}

async fn handle_safe_documents(Path(safe_id): Path<String>, Query(params): Params) -> Response {
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }
    match (safe_id.as_str(), page(&params)) {
        ("s1", 1) => Json(json!([
            { "total_documents": "2", "total_pages": 2, "current_page": 1 },
            { "uuidDoc": "d1", "nameDoc": "A" }
        ]))
        .into_response(),
        ("s1", 2) => Json(json!([{ "uuidDoc": "d2", "nameDoc": "B" }])).into_response(),
        ("broken", _) => "<html>maintenance</html>".into_response(),
        ("missing", _) => (StatusCode::NOT_FOUND, "safe not found").into_response(),
        _ => Json(json!([])).into_response(),
    }
}

async fn handle_account_documents(Query(params): Params) -> Response {
    match page(&params) {
        1 => Json(json!([{ "uuidDoc": "d1", "nameDoc": "A" }])).into_response(),
        _ => Json(json!({ "message": "no more documents" })).into_response(),
    }
}

async fn handle_signers(Path(document_id): Path<String>, Query(params): Params) -> Response {
    if !authorized(&params) {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }
    match document_id.as_str() {
        "d1" => Json(json!([{ "list": [
            { "name": "Ana", "email": "ana@example.com", "phone": "+5511999990000" },
            { "name": "Bruno" }
        ]}]))
        .into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "document lookup failed").into_response(),
    }
}

/// Spawns an axum server mimicking the D4Sign endpoints and returns its base url.
pub async fn spawn_mock_d4sign() -> eyre::Result<Url> {
    let app = Router::new()
        .route("/api/v1/safes", get(handle_safes))
        .route("/api/v1/documents", get(handle_account_documents))
        .route("/api/v1/documents/{safe_id}/safe", get(handle_safe_documents))
        .route("/api/v1/documents/{document_id}/list", get(handle_signers));
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    info!(?addr, "Mock D4Sign listening");
    Ok(Url::parse(&format!("http://{addr}/api/v1"))?)
}

pub fn client_for(base_url: Url, token_api: &str) -> eyre::Result<D4SignClient> {
    Ok(D4SignClient::new(
        D4SignConfig {
            base_url,
            timeout_secs: 5,
        },
        D4SignCredentials {
            token_api: token_api.to_string(),
            crypt_key: CRYPT_KEY.to_string(),
        },
    )?)
}
