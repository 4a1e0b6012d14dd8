use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;

use crate::types::JsonReply;

pub enum ApiError {
    MethodNotAllowed,
    /// Covers unreadable bodies as well as failed extraction; the cause is
    /// only logged.
    InvalidRequest(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let reply = match self {
            Self::MethodNotAllowed => {
                JsonReply::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            Self::InvalidRequest(e) => {
                warn!("Error processing request: {}", e);
                JsonReply::error(
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON or missing message field",
                )
            }
        };
        reply.into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InvalidRequest(err.into())
    }
}
