//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
    };

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route("/openapi.json", axum::routing::get(openapi::openapi_json));

    router
}

/// Builds the servable application: routes, request tracing, a bound on
/// request duration, and the injected state.
///
/// `request_timeout` is a backstop behind the insert bound; if it fires
/// the client gets a bodiless 500.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    build_router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
