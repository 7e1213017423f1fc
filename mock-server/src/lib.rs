//! Echo service used to exercise the fluent request client over real HTTP.
//!
//! Every route accepts any method and answers with JSON describing what it
//! received, so tests can check exactly what went over the wire.

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/echo/{*pairs}", any(echo_pairs))
        .route("/query", any(echo_query))
        .route("/headers", any(echo_headers))
        .route("/body", any(echo_body))
        .route("/method", any(echo_method))
        .route("/status/{code}", any(status))
        .route("/text", any(plain_text))
        .route("/bytes", any(invalid_utf8))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `/echo/a/1/b/2` answers `{"a":"1","b":"2"}`. A trailing name without a
/// value maps to an empty string.
async fn echo_pairs(Path(pairs): Path<String>) -> Json<Map<String, Value>> {
    let segments: Vec<&str> = pairs.split('/').filter(|s| !s.is_empty()).collect();
    let map = segments
        .chunks(2)
        .map(|pair| {
            let value = pair.get(1).copied().unwrap_or_default();
            (pair[0].to_string(), Value::String(value.to_string()))
        })
        .collect();
    Json(map)
}

async fn echo_query(Query(pairs): Query<Vec<(String, String)>>) -> Json<Map<String, Value>> {
    Json(pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
}

async fn echo_headers(headers: HeaderMap) -> Json<Map<String, Value>> {
    let map = headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), Value::String(value))
        })
        .collect();
    Json(map)
}

/// Echo a JSON body back unchanged; an empty body echoes `{}`.
async fn echo_body(body: Bytes) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if body.is_empty() {
        return Ok(Json(json!({})));
    }
    serde_json::from_slice(&body).map(Json).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
    })
}

async fn echo_method(method: Method, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let content_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    Json(json!({
        "method": method.as_str(),
        "content_length": content_length,
        "body_bytes": body.len(),
    }))
}

async fn status(Path(code): Path<u16>) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": format!("status {code}") })))
}

async fn plain_text() -> &'static str {
    "not json"
}

/// A JSON-labelled 200 whose body is not UTF-8.
async fn invalid_utf8() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Bytes::from_static(b"\"\xff\xfe\""),
    )
}
