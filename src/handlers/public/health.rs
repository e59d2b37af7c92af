use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service banner and endpoint map
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Fishlog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health (public)",
            "auth": "/api/auth/token (public - token acquisition)",
            "accounts": "/api/accounts[/:id] (public)",
            "tackle": "/api/tackle[/:id] (protected)",
            "fishingreports": "/api/fishingreports[/:id] (protected)",
            "landings": "/api/fishingreports/:id/landings[/:landing_id] (protected)",
            "users": "/api/users[/:id] (protected)",
            "species": "/api/species[/:id] (protected)",
            "locations": "/api/locations[/:id] (protected)",
        }
    }))
}

/// GET /health - storage liveness
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.stores.backend_name();

    match state.stores.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "storage": backend,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "storage": backend,
                    "error": "storage unavailable",
                })),
            )
        }
    }
}
