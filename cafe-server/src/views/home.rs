//! Landing page

use axum::response::Html;

use super::layout;

pub fn page() -> Html<String> {
    layout(
        "Home",
        r#"<div class="p-5 mb-4 bg-light rounded-3">
<h1 class="display-5 fw-bold">Coffee &amp; Wifi</h1>
<p class="fs-4">Want to work in a cafe but need power and wifi? You've found the right place!
Check out my collection of places with good coffee, strong wifi and power sockets.</p>
<a class="btn btn-warning btn-lg" href="/cafes">Show Me!</a>
</div>"#,
    )
}
