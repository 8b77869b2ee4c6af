use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use counsel::SearchResponse;
use counsel::schema::{MODEL_LABEL, now_iso8601};

use crate::AppState;
use crate::error::ApiError;

pub const SERVICE_NAME: &str = "Advogamos AI 3.0 API";

#[derive(Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    status: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    search: &'static str,
    health: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    model: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME,
        status: "online",
        endpoints: Endpoints {
            search: "POST /api/search",
            health: "GET /health",
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: now_iso8601(),
        model: MODEL_LABEL,
    })
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let Some(query) = extract_query(&body) else {
        tracing::debug!("Rejected search without a query");
        return Err(ApiError::MissingQuery);
    };

    tracing::info!(query = %query, "New query received");

    let response = state.assistant.search(&query).await?;

    tracing::info!("Response sent");
    Ok(Json(response))
}

/// Pull a non-empty string `query` out of a JSON body.
///
/// Malformed JSON and non-string values count as a missing query.
fn extract_query(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .map(str::to_owned)
}
