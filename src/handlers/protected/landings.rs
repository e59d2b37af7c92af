use axum::extract::{rejection::QueryRejection, Query, State};
use uuid::Uuid;

use super::page_query;
use crate::api::{LandingRequest, LandingResponse, PageQuery, Validate};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{AccountContext, ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::pagination::Page;

/// GET /api/fishingreports/:id/landings - shortest catch first
pub async fn list(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(report_id): ApiPath<Uuid>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Page<LandingResponse>> {
    let request = page_query(query)?.into_request()?;
    let page = state
        .landings
        .page(caller.account_id, report_id, &request)
        .await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/fishingreports/:id/landings/:landing_id
pub async fn get(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath((report_id, id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<LandingResponse> {
    let landing = state
        .landings
        .get(caller.account_id, report_id, id)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(landing))
}

/// POST /api/fishingreports/:id/landings
pub async fn post(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(report_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<LandingRequest>,
) -> ApiResult<LandingResponse> {
    request.validate()?;
    let landing = state
        .landings
        .create(caller.account_id, report_id, request)
        .await?;
    let location = format!("/api/fishingreports/{}/landings/{}", report_id, landing.id);
    Ok(ApiResponse::created(landing, location))
}

/// PUT /api/fishingreports/:id/landings/:landing_id
pub async fn put(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath((report_id, id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<LandingRequest>,
) -> ApiResult<LandingResponse> {
    request.validate()?;
    let landing = state
        .landings
        .update(caller.account_id, report_id, id, request)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(landing))
}

/// DELETE /api/fishingreports/:id/landings/:landing_id
pub async fn delete(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath((report_id, id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<()> {
    if !state.landings.delete(caller.account_id, report_id, id).await? {
        return Err(ApiError::not_found());
    }
    Ok(ApiResponse::no_content())
}
