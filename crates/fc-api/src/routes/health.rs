//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET / — liveness check kept for existing clients.
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "Function Calling API is running" }))
}
