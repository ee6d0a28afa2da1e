use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use super::handlers;
use super::state::AppState;
use crate::error::ApiError;

const ROUTE_API_MEETINGS: &str = "/api/v1/meetings";

/// Create the HTTP router.
///
/// The single route is matched inside the dispatch wrapper rather than by
/// axum's router, so the path comparison stays case-insensitive and every
/// request (including unknown paths) gets the same audit log line.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Single entry point: route the request, turn the outcome into a response,
/// and emit one structured audit event per request. Never panics.
async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let request_uri = req.uri().to_string();
    let method = req.method().to_string();
    let query = req.uri().query().unwrap_or_default().to_string();

    match route(state, req).await {
        Err(err) => {
            error!(
                status = err.status.as_u16(),
                error = %err.message,
                host = %host,
                request_uri = %request_uri,
                method = %method,
                query = %query,
                "request failed"
            );
            (err.status, err.message).into_response()
        }
        Ok((status, body)) => {
            debug!(
                status = status.as_u16(),
                host = %host,
                request_uri = %request_uri,
                method = %method,
                query = %query,
                "request handled"
            );
            (status, body).into_response()
        }
    }
}

/// Path match is case-insensitive; anything unknown is a generic 404.
async fn route(state: AppState, req: Request) -> Result<(StatusCode, String), ApiError> {
    if req.uri().path().eq_ignore_ascii_case(ROUTE_API_MEETINGS) {
        return handlers::start_meeting(state, req).await;
    }
    Err(ApiError::not_found())
}
