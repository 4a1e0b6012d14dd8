use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::message::escape_json;

/// A single-field JSON object sent back with an explicit status.
pub struct JsonReply {
    pub status: StatusCode,
    pub body: String,
}

impl JsonReply {
    pub fn response(text: &str) -> Self {
        Self::object(StatusCode::OK, "response", text)
    }

    pub fn error(status: StatusCode, text: &str) -> Self {
        Self::object(status, "error", text)
    }

    fn object(status: StatusCode, key: &str, value: &str) -> Self {
        Self {
            status,
            body: format!("{{\"{}\": \"{}\"}}", key, escape_json(value)),
        }
    }
}

impl IntoResponse for JsonReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}
