use axum::extract::State;

use crate::api::{TokenRequest, TokenResponse, Validate};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};

/// POST /api/auth/token - exchange an existing account id for a bearer token
pub async fn token_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TokenRequest>,
) -> ApiResult<TokenResponse> {
    request.validate()?;
    let Some(account_id) = request.account_id else {
        return Err(ApiError::bad_request("Account not found"));
    };

    if !state.accounts.exists(account_id).await? {
        tracing::debug!("Token requested for unknown account {}", account_id);
        return Err(ApiError::bad_request("Account not found"));
    }

    let issued = state.tokens.generate_token(account_id).map_err(|e| {
        tracing::error!("{}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    Ok(ApiResponse::success(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        account_id,
    }))
}
