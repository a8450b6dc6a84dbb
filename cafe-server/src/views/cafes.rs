//! Cafe listing

use axum::response::Html;
use shared::models::{Cafe, yes_no_label};
use std::fmt::Write;

use super::{escape, layout};

pub fn page(cafes: &[Cafe]) -> Html<String> {
    let mut body = String::from(
        r#"<h1>All Cafes</h1>
<table class="table table-striped align-middle">
<thead><tr>
<th>Cafe Name</th><th>Location</th><th>Image</th><th>Sockets</th><th>Toilets</th>
<th>Wi-Fi</th><th>Calls</th><th>Seats</th><th>Coffee Price</th><th></th>
</tr></thead>
<tbody>
"#,
    );

    for cafe in cafes {
        let _ = writeln!(
            body,
            r#"<tr>
<td>{name}</td>
<td><a href="{map_url}">{location}</a></td>
<td><img src="{img_url}" alt="{name}" width="120"></td>
<td>{sockets}</td><td>{toilet}</td><td>{wifi}</td><td>{calls}</td>
<td>{seats}</td>
<td>{price}</td>
<td><a class="btn btn-sm btn-outline-primary" href="/edit/{id}">Edit</a></td>
</tr>"#,
            id = cafe.id,
            name = escape(&cafe.name),
            map_url = escape(&cafe.map_url),
            location = escape(&cafe.location),
            img_url = escape(&cafe.img_url),
            sockets = yes_no_label(cafe.has_sockets),
            toilet = yes_no_label(cafe.has_toilet),
            wifi = yes_no_label(cafe.has_wifi),
            calls = yes_no_label(cafe.can_take_calls),
            seats = cafe.seats,
            price = escape(&cafe.coffee_price.to_string()),
        );
    }

    if cafes.is_empty() {
        body.push_str(r#"<tr><td colspan="10" class="text-muted">No cafes yet.</td></tr>"#);
    }
    body.push_str("</tbody>\n</table>\n<a href=\"/add\">Add a cafe</a> | <a href=\"/\">Return to index page</a>");

    layout("Cafes", &body)
}
