//! Request middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::infrastructure::correlation::{CorrelationId, CORRELATION_ID_HEADER};

/// Attach a [`CorrelationId`] to the request and echo it on the response.
///
/// A valid UUID sent by the caller is reused.
pub async fn correlation_id(mut request: Request, next: Next) -> Response {
    let id = CorrelationId::from_header(
        request
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    );
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}
