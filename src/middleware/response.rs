use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Successful API response: the serialized DTO as the body, no envelope.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub status_code: StatusCode,
    pub location: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with 200 status
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status_code: StatusCode::OK,
            location: None,
        }
    }

    /// Create a 201 Created response pointing at the new resource
    pub fn created(data: T, location: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status_code: StatusCode::CREATED,
            location: Some(location.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Create a 204 No Content response
    pub fn no_content() -> Self {
        Self {
            data: None,
            status_code: StatusCode::NO_CONTENT,
            location: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut response = match self.data {
            Some(data) if self.status_code != StatusCode::NO_CONTENT => {
                (self.status_code, Json(data)).into_response()
            }
            _ => self.status_code.into_response(),
        };

        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(e) => tracing::warn!("Dropping invalid Location header {}: {}", location, e),
            }
        }

        response
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_sets_location() {
        let response = ApiResponse::created(serde_json::json!({"id": 1}), "/api/species/1").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/species/1");
    }

    #[test]
    fn test_no_content_status() {
        let response = ApiResponse::no_content().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
