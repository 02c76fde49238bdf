//! Response time header middleware

use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub static RESPONSE_TIME_HEADER: HeaderName = HeaderName::from_static("x-response-time");

/// Adds `x-response-time: {n}ms` to every response
pub async fn response_time_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = format!("{}ms", start.elapsed().as_millis());

    if let Ok(value) = HeaderValue::from_str(&elapsed) {
        response
            .headers_mut()
            .insert(RESPONSE_TIME_HEADER.clone(), value);
    }

    response
}
