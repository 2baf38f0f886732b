use crate::interface_adapters::handlers::files::read_file_handler;
use crate::interface_adapters::handlers::multiplayer::{leave_session, list_sessions};
use crate::interface_adapters::handlers::scenarios::{
    generate_scenario, list_ai_scenarios, list_scenarios, toggle_favorite,
};
use crate::interface_adapters::handlers::system::{health, root, route_not_found, spa_fallback};
use crate::interface_adapters::state::AppState;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

// Build the HTTP router. A path that exists but is hit with the wrong method
// answers like any other unknown route.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route("/api/health", get(health).fallback(route_not_found))
        .route(
            "/api/scenarios",
            get(list_scenarios).fallback(route_not_found),
        )
        .route(
            "/api/ai/scenarios",
            get(list_ai_scenarios).fallback(route_not_found),
        )
        .route(
            "/api/read-file",
            post(read_file_handler).fallback(route_not_found),
        )
        .route(
            "/api/generate-scenario",
            post(generate_scenario).fallback(route_not_found),
        )
        .route(
            "/api/scenarios/{id}/toggle-favorite",
            post(toggle_favorite).fallback(route_not_found),
        )
        .route(
            "/api/multiplayer/sessions",
            get(list_sessions).fallback(route_not_found),
        )
        .route(
            "/api/multiplayer/sessions/{id}/leave",
            post(leave_session).fallback(route_not_found),
        )
        .fallback(spa_fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // The CORS layer only sends methods/headers on preflights; stamp them
        // on every other response too.
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

// Any OPTIONS request is answered here with 200 and an empty body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
