//! HTTP handlers for the analysis API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::enhancer::{ContentEnhancer, EnhanceError, TargetAudience};
use crate::models::AnalysisReport;

use super::AppState;

/// Success envelope. Serialized as a typed struct so the report's
/// order-preserving maps reach the wire in insertion order.
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: AnalysisReport,
}

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Analyze a block of text and return the full diagnostics report.
///
/// The body is read as a raw string and parsed here rather than through the
/// typed JSON extractor: a malformed body is an internal error on this
/// endpoint, not an extractor rejection. A missing `message` field is
/// treated as empty input.
pub async fn chat(State(state): State<AppState>, body: String) -> Response {
    tracing::debug!(body = %body, "chat request");

    let parsed: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "failed to parse request body");
            return internal_error(&err.to_string());
        }
    };

    let message = parsed
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    let enhancer = match ContentEnhancer::new(&state.engine, message, TargetAudience::default()) {
        Ok(enhancer) => enhancer,
        Err(EnhanceError::EmptyContent) => {
            tracing::error!("no content provided in the request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No content provided." })),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, "content analysis failed");
            return internal_error(&err.to_string());
        }
    };

    let report = enhancer.overall_analysis();
    tracing::debug!(
        simplification = report.simplification.len(),
        alternatives = report.alternatives.len(),
        jargon = report.jargon.len(),
        keywords = report.keywords.len(),
        conciseness = report.conciseness.len(),
        "analysis complete"
    );

    (StatusCode::OK, Json(ChatResponse { response: report })).into_response()
}

fn internal_error(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("An error occurred: {detail}") })),
    )
        .into_response()
}
