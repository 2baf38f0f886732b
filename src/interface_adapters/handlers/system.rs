use crate::domain::ports::Clock;
use crate::interface_adapters::http::ApiError;
use crate::interface_adapters::protocol::{HealthResponse, RootResponse};
use crate::interface_adapters::state::{AppState, SystemClock};
use axum::Json;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Html;
use std::sync::Arc;

pub const GREETING: &str = "Dungeon Master API is running";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: GREETING })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: SystemClock.timestamp(),
    })
}

// Method fallback for known paths: a wrong method is just an unknown route.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound
}

// Serve the single-page-app entry for unmatched non-API GETs.
pub async fn spa_fallback(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    if method != Method::GET || is_api_path(uri.path()) {
        return Err(ApiError::NotFound);
    }

    let Some(index_path) = state.static_index_path.as_ref() else {
        return Err(ApiError::NotFound);
    };

    tokio::fs::read_to_string(index_path)
        .await
        .map(Html)
        .map_err(|err| {
            tracing::error!(
                path = %index_path.display(),
                error = %err,
                "failed to read static index"
            );
            ApiError::InternalFailure("Failed to load application".to_string())
        })
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}
