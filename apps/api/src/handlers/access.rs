use axum::Json;
use axum::extract::State;

use crate::dto::{CheckAccessRequest, CheckAccessResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Evaluates whether a user may act on the intent of an utterance.
pub async fn check_access_handler(
    State(state): State<AppState>,
    Json(payload): Json<CheckAccessRequest>,
) -> ApiResult<Json<CheckAccessResponse>> {
    let decision = state
        .access_service
        .evaluate_access(&payload.username, &payload.input_text)
        .await?;

    Ok(Json(CheckAccessResponse {
        username: payload.username,
        intent: decision.intent,
        has_access: decision.granted,
        user_permissions: decision.effective_permissions,
    }))
}
