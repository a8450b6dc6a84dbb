//! End-to-end route tests against an in-memory database

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use cafe_server::{Config, DbService, ServerState, build_router};
use http_body_util::BodyExt;
use shared::models::Cafe;
use tower::ServiceExt;

async fn setup() -> (Router, ServerState) {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::new(Config::with_database_url("sqlite::memory:"), db);
    (build_router(state.clone()), state)
}

fn form_body(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

fn valid_form<'a>(name: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("name", name),
        ("map_url", "https://maps.example.com/lighthaus"),
        ("img_url", "https://img.example.com/lighthaus.jpg"),
        ("location", "Peckham"),
        ("has_sockets", "Yes"),
        ("has_toilet", "No"),
        ("has_wifi", "Yes"),
        ("can_take_calls", "No"),
        ("seats", "20-30"),
        ("coffee_price", "2.5"),
    ]
}

fn with_field<'a>(
    mut form: Vec<(&'static str, &'a str)>,
    field: &str,
    value: &'a str,
) -> Vec<(&'static str, &'a str)> {
    for entry in form.iter_mut() {
        if entry.0 == field {
            entry.1 = value;
        }
    }
    form
}

async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, Option<String>, String) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap();
    send(app, req).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn all_cafes(state: &ServerState) -> Vec<Cafe> {
    sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, has_sockets, has_toilet, has_wifi, can_take_calls, seats, coffee_price_pence AS coffee_price FROM cafe ORDER BY id",
    )
    .fetch_all(&state.db.pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn home_page_renders() {
    let (app, _) = setup().await;
    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Coffee &amp; Wifi"));
}

#[tokio::test]
async fn add_page_shows_empty_form() {
    let (app, _) = setup().await;
    let (status, _, body) = get(&app, "/add").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/add""#));
    assert!(body.contains(r#"name="coffee_price""#));
}

#[tokio::test]
async fn add_stores_each_flag_from_its_own_field() {
    let (app, state) = setup().await;

    let (status, location, _) = post_form(&app, "/add", &valid_form("Lighthaus")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/cafes"));

    let cafes = all_cafes(&state).await;
    assert_eq!(cafes.len(), 1);
    let cafe = &cafes[0];
    assert_eq!(cafe.name, "Lighthaus");
    assert!(cafe.has_sockets);
    assert!(!cafe.has_toilet);
    assert!(cafe.has_wifi);
    assert!(!cafe.can_take_calls);
    assert_eq!(cafe.seats.label(), "20-30");
    assert_eq!(cafe.coffee_price.pence(), 250);
}

#[tokio::test]
async fn listing_shows_price_with_two_decimals() {
    let (app, _) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let (status, _, body) = get(&app, "/cafes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lighthaus"));
    assert!(body.contains("£2.50"));
    assert!(body.contains(r#"href="/edit/1""#));
}

#[tokio::test]
async fn invalid_url_is_rejected_and_nothing_is_stored() {
    let (app, state) = setup().await;

    let form = with_field(valid_form("Lighthaus"), "map_url", "not a url");
    let (status, location, body) = post_form(&app, "/add", &form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(location.is_none());
    assert!(body.contains("Invalid URL."));
    // Submitted values are kept
    assert!(body.contains("not a url"));
    assert!(all_cafes(&state).await.is_empty());
}

#[tokio::test]
async fn script_and_mail_links_are_rejected() {
    let (app, state) = setup().await;

    for bad in ["javascript:alert(document.cookie)", "mailto:x", "a:b"] {
        let form = with_field(valid_form("Lighthaus"), "map_url", bad);
        let (status, location, body) = post_form(&app, "/add", &form).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{bad}");
        assert!(location.is_none());
        assert!(body.contains("Invalid URL."));
    }

    assert!(all_cafes(&state).await.is_empty());
    let (_, _, body) = get(&app, "/cafes").await;
    assert!(!body.contains("javascript:"));
}

#[tokio::test]
async fn missing_fields_are_required() {
    let (app, state) = setup().await;

    let (status, _, body) = post_form(&app, "/add", &[("name", "Lighthaus")]).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("This field is required."));
    assert!(all_cafes(&state).await.is_empty());
}

#[tokio::test]
async fn bad_price_and_seats_are_rejected() {
    let (app, state) = setup().await;

    let form = with_field(valid_form("Lighthaus"), "coffee_price", "cheap");
    let (status, _, body) = post_form(&app, "/add", &form).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Not a valid decimal value."));

    let form = with_field(valid_form("Lighthaus"), "seats", "1000");
    let (status, _, body) = post_form(&app, "/add", &form).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Not a valid choice."));

    assert!(all_cafes(&state).await.is_empty());
}

#[tokio::test]
async fn duplicate_name_is_a_field_error() {
    let (app, state) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let form = with_field(valid_form("Lighthaus"), "map_url", "https://maps.example.com/other");
    let form = with_field(form, "img_url", "https://img.example.com/other.jpg");
    let (status, _, body) = post_form(&app, "/add", &form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("A cafe with this Cafe Name already exists."));
    assert_eq!(all_cafes(&state).await.len(), 1);
}

#[tokio::test]
async fn edit_page_is_prefilled() {
    let (app, _) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let (status, _, body) = get(&app, "/edit/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/edit/1""#));
    assert!(body.contains(r#"value="Lighthaus""#));
    assert!(body.contains(r#"value="2.50""#));
    assert!(body.contains(r#"<option value="20-30" selected>"#));
}

#[tokio::test]
async fn edit_persists_changes_and_keeps_id() {
    let (app, state) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let form = with_field(valid_form("Lighthaus Roastery"), "has_toilet", "Yes");
    let form = with_field(form, "coffee_price", "3.105");
    let (status, location, _) = post_form(&app, "/edit/1", &form).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/cafes"));

    let cafes = all_cafes(&state).await;
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].id, 1);
    assert_eq!(cafes[0].name, "Lighthaus Roastery");
    assert!(cafes[0].has_toilet);
    // Banker's rounding
    assert_eq!(cafes[0].coffee_price.pence(), 310);
}

#[tokio::test]
async fn invalid_edit_leaves_record_untouched() {
    let (app, state) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let form = with_field(valid_form("Renamed"), "img_url", "nope");
    let (status, _, _) = post_form(&app, "/edit/1", &form).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(all_cafes(&state).await[0].name, "Lighthaus");
}

#[tokio::test]
async fn editing_missing_cafe_is_not_found() {
    let (app, _) = setup().await;

    let (status, _, _) = get(&app, "/edit/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = post_form(&app, "/edit/42", &valid_form("Ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_cafe_then_reports_not_found() {
    let (app, state) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let (status, _, body) = get(&app, "/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/delete/1""#));

    let (status, location, _) = post_form(&app, "/delete/1", &[]).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/delete"));
    assert!(all_cafes(&state).await.is_empty());

    let (status, _, _) = post_form(&app, "/delete/1", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_by_get_link_still_works() {
    let (app, state) = setup().await;
    post_form(&app, "/add", &valid_form("Lighthaus")).await;

    let (status, location, _) = get(&app, "/delete/1").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/delete"));
    assert!(all_cafes(&state).await.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let (app, _) = setup().await;
    let (status, _, _) = get(&app, "/edit/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_is_html_not_found() {
    let (app, _) = setup().await;
    let (status, _, body) = get(&app, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn health_reports_database() {
    let (app, _) = setup().await;
    let (status, _, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db"], true);
}

#[tokio::test]
async fn file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("cafes.db").display());

    {
        let db = DbService::new(&url, 1).await.unwrap();
        let app = build_router(ServerState::new(Config::with_database_url(&url), db.clone()));
        let (status, _, _) = post_form(&app, "/add", &valid_form("Lighthaus")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        db.pool.close().await;
    }

    let db = DbService::new(&url, 1).await.unwrap();
    let state = ServerState::new(Config::with_database_url(&url), db);
    let cafes = all_cafes(&state).await;
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].name, "Lighthaus");
}
