//! Delete list: every cafe with its own delete button

use axum::response::Html;
use shared::models::Cafe;
use std::fmt::Write;

use super::{escape, layout};

pub fn page(cafes: &[Cafe]) -> Html<String> {
    let mut body = String::from("<h1>Delete a Cafe</h1>\n<ul class=\"list-group mb-3\">\n");

    for cafe in cafes {
        let _ = writeln!(
            body,
            r#"<li class="list-group-item d-flex justify-content-between align-items-center">
<span>{name} <small class="text-muted">{location}</small></span>
<form method="post" action="/delete/{id}" class="m-0">
<button type="submit" class="btn btn-sm btn-danger">Delete</button>
</form>
</li>"#,
            id = cafe.id,
            name = escape(&cafe.name),
            location = escape(&cafe.location),
        );
    }

    if cafes.is_empty() {
        body.push_str("<li class=\"list-group-item text-muted\">No cafes to delete.</li>\n");
    }
    body.push_str("</ul>\n<a href=\"/cafes\">Back to all cafes</a>");

    layout("Delete", &body)
}
