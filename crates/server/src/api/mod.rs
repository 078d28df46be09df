//! HTTP boundary.

pub mod error;
pub mod extract;
pub mod http;
pub mod middleware;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::infrastructure::correlation::CorrelationId;

pub use error::ApiError;

/// The full router with tracing, correlation ids and optional CORS applied.
pub fn router(app: Arc<App>, cors: Option<CorsLayer>) -> Router {
    let router = http::routes()
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let correlation_id = request
                .extensions()
                .get::<CorrelationId>()
                .map(ToString::to_string)
                .unwrap_or_default();
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                correlation_id = %correlation_id,
            )
        }))
        .layer(axum::middleware::from_fn(middleware::correlation_id))
        .with_state(app);

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
