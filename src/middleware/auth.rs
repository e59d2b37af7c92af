use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Caller identity bound by [`require_account`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountContext {
    pub account_id: Uuid,
}

/// Bearer token guard for account-scoped routes. Performs no storage lookup.
pub async fn require_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_jwt_from_headers(&headers) {
        Ok(token) => token,
        Err(msg) => {
            tracing::debug!("Unauthenticated request to {}: {}", request.uri().path(), msg);
            return ApiError::unauthorized(msg).into_response();
        }
    };

    let Some(account_id) = state.tokens.validate_and_extract_account_id(&token) else {
        return ApiError::unauthorized("Invalid or expired token").into_response();
    };

    request.extensions_mut().insert(AccountContext { account_id });
    next.run(request).await
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AccountContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AccountContext>() {
            Some(context) => Ok(*context),
            None => {
                // Route is missing the require_account layer
                tracing::error!("AccountContext requested on unguarded route {}", parts.uri.path());
                Err(ApiError::internal_server_error("Caller identity unavailable"))
            }
        }
    }
}
