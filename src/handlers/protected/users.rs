use axum::extract::State;
use uuid::Uuid;

use crate::api::{UserRequest, UserResponse, Validate};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{AccountContext, ApiJson, ApiPath, ApiResponse, ApiResult};

/// GET /api/users - the caller's users, by last then first name
pub async fn list(State(state): State<AppState>, caller: AccountContext) -> ApiResult<Vec<UserResponse>> {
    Ok(ApiResponse::success(state.users.list(caller.account_id).await?))
}

/// GET /api/users/:id
pub async fn get(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<UserResponse> {
    let user = state
        .users
        .get(caller.account_id, id)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(user))
}

/// POST /api/users
pub async fn post(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiJson(request): ApiJson<UserRequest>,
) -> ApiResult<UserResponse> {
    request.validate()?;
    let user = state.users.create(caller.account_id, request).await?;
    let location = format!("/api/users/{}", user.id);
    Ok(ApiResponse::created(user, location))
}

/// PUT /api/users/:id
pub async fn put(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UserRequest>,
) -> ApiResult<UserResponse> {
    request.validate()?;
    let user = state
        .users
        .update(caller.account_id, id, request)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(user))
}

/// DELETE /api/users/:id
pub async fn delete(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<()> {
    if !state.users.delete(caller.account_id, id).await? {
        return Err(ApiError::not_found());
    }
    Ok(ApiResponse::no_content())
}
