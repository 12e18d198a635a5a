//! Integration tests for the Medibot API.
//!
//! Each test builds its own router over a composer with no thinking pause.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use medibot_api::create_router;
use medibot_api::error::ErrorBody;
use medibot_api::handlers::{
    ChatResponse, HealthResponse, RootResponse, ServicesResponse, SessionResponse,
};
use medibot_api::state::AppState;
use medibot_chat::ResponseComposer;
use medibot_core::MedibotConfig;

// =============================================================================
// Helpers
// =============================================================================

fn make_state(config: MedibotConfig) -> AppState {
    AppState::new(config, ResponseComposer::new())
}

fn make_app() -> axum::Router {
    create_router(make_state(MedibotConfig::default()))
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn chat(app: axum::Router, json: &str) -> ChatResponse {
    let resp = app.oneshot(post_json("/api/chat", json)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// =============================================================================
// GET / and /health
// =============================================================================

#[tokio::test]
async fn test_root_banner() {
    let resp = make_app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let root: RootResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(root.status, "healthy");
    assert_eq!(root.endpoints.get("chat").map(String::as_str), Some("/api/chat"));
    assert_eq!(root.endpoints.get("health").map(String::as_str), Some("/health"));
}

#[tokio::test]
async fn test_health() {
    let mut config = MedibotConfig::default();
    config.chat.thinking_delay = false;
    let app = create_router(make_state(config));

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "MediCare AI API");
    assert!(!health.thinking_delay);
}

// =============================================================================
// POST /api/chat
// =============================================================================

#[tokio::test]
async fn test_chat_omicron_question() {
    let resp = chat(
        make_app(),
        r#"{"message":"What are Omicron symptoms?","userName":"Alex","selectedService":""}"#,
    )
    .await;
    assert!(resp.success);
    assert!(resp.response.contains("Omicron"));
    assert!(resp.response.contains("Alex"));
}

#[tokio::test]
async fn test_chat_preselected_service() {
    let resp = chat(
        make_app(),
        r#"{"message":"I have a headache","userName":"Maria","selectedService":"insurance"}"#,
    )
    .await;
    assert!(resp.response.contains("Insurance Information for Maria"));
}

#[tokio::test]
async fn test_chat_service_wins_over_keywords() {
    let resp = chat(
        make_app(),
        r#"{"message":"show me sentiment","userName":"Alex","selectedService":"chat"}"#,
    )
    .await;
    assert!(resp.response.starts_with("🏥 **MediCare AI for Alex**"));
    assert!(resp.response.contains("Service: 💬 Chat Freely"));
    assert!(!resp.response.contains("Sentiment Analysis"));
}

#[tokio::test]
async fn test_chat_optional_fields_default() {
    let resp = chat(make_app(), r#"{"message":"hello"}"#).await;
    assert!(resp.success);
    assert!(resp.response.contains("Hello User!"));
}

#[tokio::test]
async fn test_chat_unknown_service_is_ignored() {
    let resp = chat(
        make_app(),
        r#"{"message":"I have a fever","userName":"Kim","selectedService":"astrology"}"#,
    )
    .await;
    assert!(resp.response.contains("About Fever, Kim"));
}

#[tokio::test]
async fn test_chat_empty_message_still_answers() {
    let resp = chat(make_app(), r#"{"message":"","userName":"Alex"}"#).await;
    assert!(resp.success);
    assert!(resp.response.contains("Alex"));
}

#[tokio::test]
async fn test_chat_missing_message_is_bad_request() {
    let resp = make_app()
        .oneshot(post_json("/api/chat", r#"{"userName":"Alex"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.error, "bad_request");
}

#[tokio::test]
async fn test_chat_malformed_json_is_bad_request() {
    let resp = make_app()
        .oneshot(post_json("/api/chat", "{not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_oversized_body_rejected() {
    let big = "a".repeat(100 * 1024);
    let json = serde_json::json!({ "message": big }).to_string();
    let resp = make_app().oneshot(post_json("/api/chat", &json)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// POST /api/session and GET /api/services
// =============================================================================

#[tokio::test]
async fn test_session_welcome() {
    let resp = make_app()
        .oneshot(post_json(
            "/api/session",
            r#"{"userName":"Alex","selectedService":"health"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let session: SessionResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(
        session.welcome,
        "Hello Alex! 👋 I'm ready to help you with 🩺 health status assessment. What would you like to know?"
    );
}

#[tokio::test]
async fn test_services_catalogue() {
    let resp = make_app().oneshot(get("/api/services")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let catalogue: ServicesResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    let keys: Vec<&str> = catalogue.services.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["health", "insurance", "appointments", "general", "emergency", "chat"]
    );
    assert_eq!(catalogue.services[5].label, "💬 Chat Freely");
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_rate_limit_applies_to_api_routes() {
    let mut config = MedibotConfig::default();
    config.server.rate_limit_per_sec = 2;
    let app = create_router(make_state(config));

    let mut statuses = Vec::new();
    for _ in 0..6 {
        let resp = app.clone().oneshot(get("/api/services")).await.unwrap();
        statuses.push(resp.status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn test_rate_limit_exempts_health() {
    let mut config = MedibotConfig::default();
    config.server.rate_limit_per_sec = 0;
    let app = create_router(make_state(config));

    let resp = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/api/services")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["error"], "too_many_requests");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/chat")
        .header("origin", "http://localhost:3001")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = make_app().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3001")
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/chat")
        .header("origin", "https://evil.example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = make_app().oneshot(req).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let resp = make_app().oneshot(get("/api/nothing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
