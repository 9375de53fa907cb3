use crate::api::{handlers, middleware};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the service router, with the calculate endpoint mounted under `/api/{api_version}`.
pub fn router(api_version: &str) -> Router {
    let calculate_path = format!("/api/{}/calculate", api_version);

    let routes = Router::new()
        .route(&calculate_path, post(handlers::calculate))
        .route("/ping", get(handlers::ping));
    with_middleware(routes, REQUEST_TIMEOUT)
}

/// Wraps `routes` in the request id, access log, panic recovery and timeout layers.
///
/// The access log sits outside recovery and timeout, so panicked and timed out requests are
/// logged with the status they were answered with.
pub fn with_middleware(routes: Router, timeout: Duration) -> Router {
    // Layers added last run first.
    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            timeout,
        ))
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
