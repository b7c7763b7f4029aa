use crate::error::AppError;
use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::time::Instant;

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Attaches the wall-clock time spent handling the request, in seconds.
pub async fn add_process_time_header(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = started.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}

/// Gives the router's own 405 responses the JSON error envelope.
///
/// The `Allow` header computed by the method router is carried over.
pub async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut mapped = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        mapped.headers_mut().insert(header::ALLOW, allow);
    }
    mapped
}

/// Turns a handler panic into the generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked.");
    AppError::Unexpected.into_response()
}
