//! End-to-end tests for the analysis API through the public router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use prosecheck::server::{create_router, AppState};

async fn post_chat(body: &str) -> (StatusCode, serde_json::Value) {
    let app = create_router(AppState::new());
    let response = app
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
async fn chat_returns_all_eight_sections() {
    let (status, json) = post_chat(
        r#"{"message": "NASA published excellent research. The organization uses sophisticated methodologies to improve its work."}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = json["response"].as_object().unwrap();
    assert_eq!(report.len(), 8);

    assert!(report["readability"]["flesch_reading_ease"].is_number());
    assert!(report["readability"]["gunning_fog_index"].is_number());

    let label = report["sentiment"]["label"].as_str().unwrap();
    assert!(label == "POSITIVE" || label == "NEGATIVE");
    assert!(report["sentiment"]["score"].as_f64().unwrap() >= 0.5);

    let simplification = report["simplification"].as_array().unwrap();
    assert!(!simplification.is_empty());
    let complex_words: Vec<&str> = simplification[0]["complex_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    assert!(complex_words.contains(&"sophisticated"));
    assert!(complex_words.contains(&"methodologies"));

    let jargon = report["jargon"].as_array().unwrap();
    assert!(jargon.iter().any(|j| j == "NASA"));

    let glossary = report["glossary"].as_object().unwrap();
    assert_eq!(glossary.len(), jargon.len());

    assert!(report["keywords"].as_object().unwrap().len() <= 10);
    assert!(report["conciseness"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_alternatives_never_echo_the_token() {
    let (status, json) =
        post_chat(r#"{"message": "A big plan can help the small company."}"#).await;

    assert_eq!(status, StatusCode::OK);
    let alternatives = json["response"]["alternatives"].as_object().unwrap();
    for (token, synonyms) in alternatives {
        let synonyms = synonyms.as_array().unwrap();
        assert!(synonyms.len() <= 5, "{token} has too many alternatives");
        assert!(
            !synonyms.iter().any(|s| s.as_str() == Some(token.as_str())),
            "{token} listed as its own alternative"
        );
    }
}

#[tokio::test]
async fn chat_empty_message_is_rejected() {
    let (status, json) = post_chat(r#"{"message": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "No content provided." }));
}

#[tokio::test]
async fn chat_missing_message_is_rejected() {
    let (status, json) = post_chat(r#"{"other": "field"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "No content provided." }));
}

#[tokio::test]
async fn chat_whitespace_message_is_rejected() {
    let (status, _) = post_chat(r#"{"message": "   \n  "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_extra_fields_are_ignored() {
    let (status, json) =
        post_chat(r#"{"message": "Plain words here.", "audience": "editors", "x": 1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("response").is_some());
}

#[tokio::test]
async fn chat_malformed_json_is_internal_error() {
    let (status, json) = post_chat("{\"message\": ").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("An error occurred: "));
    assert!(json.get("response").is_none());
}
