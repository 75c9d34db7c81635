use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vidshelf_core::error::NavError;

/// Newtype wrapper so we can implement `IntoResponse` in this crate.
///
/// Every retrieval failure surfaces the same way: HTTP 500 with a
/// plain-text `Error: <message>` body.
pub struct AppError(pub NavError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let NavError::Upstream(msg) = self.0;
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {msg}")).into_response()
    }
}

impl From<NavError> for AppError {
    fn from(e: NavError) -> Self {
        Self(e)
    }
}
