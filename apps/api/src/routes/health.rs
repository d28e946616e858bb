use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::extract::iso_timestamp;
use crate::state::AppState;

/// GET /health
/// Liveness plus whether an API key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": iso_timestamp(),
        "openai_configured": state.config.openai_configured()
    }))
}

/// GET /api/health
/// Same as `/health`, with the model name, service version and route list.
pub async fn api_health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": iso_timestamp(),
        "openai_configured": state.config.openai_configured(),
        "openai_model": state.config.openai_model,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/generate": "Generate AI resume content (POST)",
            "/generate-resume": "Legacy resume generation (POST)",
            "/contact": "Contact form submission (POST)",
            "/health": "Liveness check (GET)",
            "/api/health": "Health check (GET)"
        }
    }))
}
