use axum::extract::State;
use uuid::Uuid;

use crate::api::{AccountRequest, AccountResponse, Validate};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiPath, ApiResponse, ApiResult};

/// GET /api/accounts
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AccountResponse>> {
    Ok(ApiResponse::success(state.accounts.list().await?))
}

/// GET /api/accounts/:id
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<AccountResponse> {
    let account = state.accounts.get(id).await?.ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(account))
}

/// POST /api/accounts - no token; this is how callers get an account to mint one for
pub async fn post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AccountRequest>,
) -> ApiResult<AccountResponse> {
    request.validate()?;
    let account = state.accounts.create(request).await?;
    let location = format!("/api/accounts/{}", account.id);
    Ok(ApiResponse::created(account, location))
}

/// PUT /api/accounts/:id
pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AccountRequest>,
) -> ApiResult<AccountResponse> {
    request.validate()?;
    let account = state
        .accounts
        .update(id, request)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(account))
}

/// DELETE /api/accounts/:id
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<()> {
    if !state.accounts.delete(id).await? {
        return Err(ApiError::not_found());
    }
    Ok(ApiResponse::no_content())
}
