//! Server-rendered HTML views
//!
//! Every page shares [`layout`], which pulls Bootstrap from a CDN. All
//! user-supplied text goes through [`escape`] before it is interpolated.

pub mod cafes;
pub mod delete;
pub mod error;
pub mod form;
pub mod home;

use axum::response::Html;
use std::fmt::Write;

const SITE_TITLE: &str = "Coffee & Wifi";

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell
pub fn layout(title: &str, body: &str) -> Html<String> {
    let mut page = String::with_capacity(body.len() + 1024);
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<link rel="stylesheet" href="{css}">
</head>
<body>
<nav class="navbar navbar-expand navbar-dark bg-dark mb-4">
<div class="container">
<a class="navbar-brand" href="/">{site}</a>
<div class="navbar-nav">
<a class="nav-link" href="/cafes">Cafes</a>
<a class="nav-link" href="/add">Add</a>
<a class="nav-link" href="/delete">Delete</a>
</div>
</div>
</nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        site = escape(SITE_TITLE),
        css = BOOTSTRAP_CSS,
        body = body,
    );
    Html(page)
}
