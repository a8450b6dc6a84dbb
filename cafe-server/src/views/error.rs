//! Error page

use axum::http::StatusCode;
use axum::response::Html;

use super::{escape, layout};

pub fn page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n<a href=\"/cafes\">Back to all cafes</a>",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, &body)
}
