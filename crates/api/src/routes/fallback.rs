//! Explicit responses for requests that match no route.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Router-level fallback: the path is not served at all.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {method} {}", uri.path()))
}

/// Method-level fallback: the path exists but only answers GET and HEAD.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("method {method} not allowed on {}", uri.path()))
}
