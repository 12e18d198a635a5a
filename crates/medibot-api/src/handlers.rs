//! Route handler functions for all API endpoints.
//!
//! Request bodies use the camelCase field names the web client sends.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use medibot_core::{Category, SessionContext};

use crate::error::ApiError;
use crate::state::AppState;

/// Name reported by the banner and health check.
pub const SERVICE_NAME: &str = "MediCare AI API";

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub selected_service: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub selected_service: String,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub welcome: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub key: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
    pub thinking_delay: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub endpoints: BTreeMap<String, String>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Unknown service names are logged and treated as "no selection".
fn resolve_service(raw: &str) -> Option<Category> {
    match Category::parse_service(raw) {
        Ok(service) => service,
        Err(e) => {
            warn!(error = %e, "Ignoring unknown selectedService");
            None
        }
    }
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - banner with the endpoint map.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let endpoints = [
        ("chat", "/api/chat"),
        ("session", "/api/session"),
        ("services", "/api/services"),
        ("health", "/health"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(RootResponse {
        message: format!("{SERVICE_NAME} is running"),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        endpoints,
    })
}

/// GET /health - liveness and basic runtime facts.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        thinking_delay: state.config.chat.thinking_delay,
    })
}

/// GET /api/services - the user-selectable service catalogue.
pub async fn services() -> Json<ServicesResponse> {
    let services = Category::SERVICES
        .iter()
        .map(|c| ServiceInfo {
            key: c.as_str().to_string(),
            label: c.label().to_string(),
            description: c.description().to_string(),
        })
        .collect();
    Json(ServicesResponse { services })
}

/// POST /api/chat - answer one message.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let context = SessionContext::new(request.user_name, resolve_service(&request.selected_service));

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "chat",
        %request_id,
        service = ?context.selected_service,
        chars = request.message.chars().count()
    );

    let response = async {
        let response = state.composer.compose(&request.message, &context).await;
        info!("Chat response composed");
        response
    }
    .instrument(span)
    .await;

    Ok(Json(ChatResponse {
        response,
        success: true,
    }))
}

/// POST /api/session - welcome line for a newly selected service.
pub async fn session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Json(request) = payload?;
    let context = SessionContext::new(request.user_name, resolve_service(&request.selected_service));
    Ok(Json(SessionResponse {
        welcome: state.composer.welcome(&context),
    }))
}
