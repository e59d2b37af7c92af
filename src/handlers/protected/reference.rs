use axum::extract::{rejection::QueryRejection, Query, State};

use super::page_query;
use crate::api::{FishSpeciesResponse, LocationResponse, PageQuery};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiPath, ApiResponse, ApiResult};
use crate::pagination::Page;

// Reference data is shared by every account; the token is still required.

/// GET /api/species - always paginated, in display order
pub async fn species_list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Page<FishSpeciesResponse>> {
    let request = page_query(query)?.into_request()?;
    Ok(ApiResponse::success(state.reference.species_page(&request).await?))
}

/// GET /api/species/:id
pub async fn species_get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<FishSpeciesResponse> {
    let species = state.reference.species(id).await?.ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(species))
}

/// GET /api/locations - always paginated, in display order
pub async fn location_list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Page<LocationResponse>> {
    let request = page_query(query)?.into_request()?;
    Ok(ApiResponse::success(state.reference.locations(&request).await?))
}

/// GET /api/locations/:id
pub async fn location_get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<LocationResponse> {
    let location = state.reference.location(id).await?.ok_or_else(ApiError::not_found)?;
    Ok(ApiResponse::success(location))
}
