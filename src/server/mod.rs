//! Web server exposing the content analysis API.
//!
//! One POST endpoint accepts draft text and returns the full diagnostics
//! report; a health endpoint supports container orchestration. Requests
//! are handled independently; the NLP engine is the only shared resource
//! and is read-only after startup.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::nlp::NlpEngine;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<NlpEngine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(NlpEngine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new();
    let app = create_router(state);

    let addr: SocketAddr = settings.bind.parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        create_router(AppState::new())
    }

    async fn post_chat(body: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_returns_report() {
        let (status, json) =
            post_chat(r#"{"message": "The organization uses sophisticated methodologies."}"#).await;

        assert_eq!(status, StatusCode::OK);
        let report = &json["response"];
        for key in [
            "readability",
            "sentiment",
            "simplification",
            "alternatives",
            "jargon",
            "keywords",
            "conciseness",
            "glossary",
        ] {
            assert!(report.get(key).is_some(), "missing section {key}");
        }
        assert!(report["readability"]["flesch_reading_ease"].is_number());
        assert!(report["conciseness"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_bad_request() {
        let (status, json) = post_chat(r#"{"message": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "error": "No content provided." }));
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_internal_error() {
        let (status, json) = post_chat("{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("An error occurred: "));
        assert!(json.get("response").is_none());
    }
}
