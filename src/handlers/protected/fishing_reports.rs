use axum::extract::{rejection::QueryRejection, Query, State};
use uuid::Uuid;

use super::page_query;
use crate::api::{
    CreateFishingReportRequest, FishingReportResponse, PageQuery, UpdateFishingReportRequest, Validate,
};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{AccountContext, ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::pagination::Page;

/// GET /api/fishingreports - newest trips first
pub async fn list(
    State(state): State<AppState>,
    caller: AccountContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Page<FishingReportResponse>> {
    let request = page_query(query)?.into_request()?;
    let page = state.reports.page(caller.account_id, &request).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/fishingreports/:id
pub async fn get(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<FishingReportResponse> {
    let report = state
        .reports
        .get(caller.account_id, id)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(report))
}

/// POST /api/fishingreports
pub async fn post(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiJson(request): ApiJson<CreateFishingReportRequest>,
) -> ApiResult<FishingReportResponse> {
    request.validate()?;
    let report = state.reports.create(caller.account_id, request).await?;
    let location = format!("/api/fishingreports/{}", report.id);
    Ok(ApiResponse::created(report, location))
}

/// PUT /api/fishingreports/:id - only the fields present in the body change
pub async fn put(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateFishingReportRequest>,
) -> ApiResult<FishingReportResponse> {
    request.validate()?;
    let report = state
        .reports
        .update(caller.account_id, id, request)
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(report))
}

/// DELETE /api/fishingreports/:id
pub async fn delete(
    State(state): State<AppState>,
    caller: AccountContext,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<()> {
    if !state.reports.delete(caller.account_id, id).await? {
        return Err(ApiError::not_found());
    }
    Ok(ApiResponse::no_content())
}
