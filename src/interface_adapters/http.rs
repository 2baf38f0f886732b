// Shared HTTP error types and body parsing for consistent API error payloads.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::domain::errors::RequestError;

pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INVALID_JSON: &str = "Invalid JSON in request body";

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    // Human-readable error string for consistent JSON error responses.
    pub error: String,
}

// Every failure a request can end in.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    InternalFailure(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InternalFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(message) | ApiError::InternalFailure(message) => message,
            ApiError::NotFound => ROUTE_NOT_FOUND.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::MissingField(field) => {
                ApiError::BadRequest(format!("{field} is required"))
            }
        }
    }
}

// Parse a raw body as JSON regardless of the request's Content-Type.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "rejected request body");
        ApiError::BadRequest(INVALID_JSON.to_string())
    })
}
