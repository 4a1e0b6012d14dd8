use axum::body::{to_bytes, Body};
use axum::http::Method;
use log::debug;

use crate::error::ApiError;
use crate::message::extract_message;
use crate::types::JsonReply;

pub async fn messages(method: Method, body: Body) -> Result<JsonReply, ApiError> {
    if method != Method::POST {
        debug!("Rejecting {} on messages endpoint", method);
        return Err(ApiError::MethodNotAllowed);
    }

    let bytes = to_bytes(body, usize::MAX).await?;
    let text = String::from_utf8_lossy(&bytes);
    let message = extract_message(&text)?;
    debug!("Received message ({} bytes)", message.len());

    if message == "ping" {
        return Ok(JsonReply::response("pong"));
    }
    Ok(JsonReply::response(message))
}
