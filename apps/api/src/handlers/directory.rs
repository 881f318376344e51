use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use gatekeep_core::AppError;

use crate::dto::{
    AssignPermissionRequest, AssignRoleRequest, CreatePermissionRequest, CreateRoleRequest,
    CreateUserRequest, PermissionResponse, RoleResponse, UserResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// Registers a user.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.directory_service.create_user(&payload.username).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Creates a role.
pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state.directory_service.create_role(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

/// Creates a permission.
pub async fn create_permission_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    let permission = state
        .directory_service
        .create_permission(&payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PermissionResponse::from(permission)),
    ))
}

/// Assigns an existing role to an existing user.
pub async fn assign_role_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(payload): Json<AssignRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    state
        .directory_service
        .assign_role_to_user(&username, &payload.role)
        .await?;

    let user = state
        .directory_service
        .find_user(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user '{username}' not found")))?;

    Ok(Json(UserResponse::from(user)))
}

/// Assigns an existing permission to an existing role.
pub async fn assign_permission_handler(
    State(state): State<AppState>,
    Path(role_name): Path<String>,
    Json(payload): Json<AssignPermissionRequest>,
) -> ApiResult<StatusCode> {
    state
        .directory_service
        .assign_permission_to_role(&role_name, &payload.permission)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
