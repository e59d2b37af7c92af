use axum::extract::{rejection::QueryRejection, Query, State};
use uuid::Uuid;

use super::page_query;
use crate::api::{PageQuery, TackleRequest, TackleResponse, Validate};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{AccountContext, ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::pagination::Page;

/// GET /api/tackle - the caller's tackle by name
pub async fn list(
    State(state): State<AppState>,
    caller: AccountContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Page<TackleResponse>> {
    let request = page_query(query)?.into_request()?;
    let page = state.tackle.page(caller.account_id, &request).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/tackle/:id
pub async fn get(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<TackleResponse> {
    let tackle = state
        .tackle
        .get(caller.account_id, id)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(tackle))
}

/// POST /api/tackle
pub async fn post(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiJson(request): ApiJson<TackleRequest>,
) -> ApiResult<TackleResponse> {
    request.validate()?;
    let tackle = state.tackle.create(caller.account_id, request).await?;
    let location = format!("/api/tackle/{}", tackle.id);
    Ok(ApiResponse::created(tackle, location))
}

/// PUT /api/tackle/:id
pub async fn put(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<TackleRequest>,
) -> ApiResult<TackleResponse> {
    request.validate()?;
    let tackle = state
        .tackle
        .update(caller.account_id, id, request)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(tackle))
}

/// DELETE /api/tackle/:id
pub async fn delete(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<()> {
    if !state.tackle.delete(caller.account_id, id).await? {
        return Err(ApiError::not_found());
    }
    Ok(ApiResponse::no_content())
}
