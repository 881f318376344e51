use axum::Json;

use crate::dto::HealthResponse;

/// Reports service liveness.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
