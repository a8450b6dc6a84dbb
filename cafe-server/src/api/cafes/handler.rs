//! Cafe API Handlers

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use shared::models::{CafeForm, FIELDS, FormErrors};

use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::utils::{AppError, AppResult};
use crate::views::{self, form::FormMode};

const LIST_PATH: &str = "/cafes";
const DELETE_PATH: &str = "/delete";

/// GET /cafes - all cafes
pub async fn list(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let cafes = cafe::find_all(&state.db.pool).await?;
    Ok(views::cafes::page(&cafes))
}

/// GET /add - empty form
pub async fn add_page() -> Html<String> {
    views::form::page(&CafeForm::default(), &FormErrors::new(), FormMode::Create)
}

/// POST /add - validate and insert
pub async fn add_submit(
    State(state): State<ServerState>,
    Form(form): Form<CafeForm>,
) -> AppResult<Response> {
    let mode = FormMode::Create;
    let input = match form.normalize() {
        Ok(input) => input,
        Err(errors) => return Ok(rejected(&form, &errors, mode)),
    };

    match cafe::create(&state.db.pool, &input).await {
        Ok(_) => Ok(Redirect::to(LIST_PATH).into_response()),
        Err(RepoError::Duplicate(column)) => Ok(rejected(&form, &duplicate(&column)?, mode)),
        Err(e) => Err(e.into()),
    }
}

/// GET /edit/{id} - form pre-filled from the stored cafe
pub async fn edit_page(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let cafe = cafe::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cafe {id} not found")))?;
    Ok(views::form::page(
        &CafeForm::from(&cafe),
        &FormErrors::new(),
        FormMode::Edit(id),
    ))
}

/// POST /edit/{id} - validate and overwrite every field except the id
///
/// A missing id surfaces as 404 from the UPDATE itself.
pub async fn edit_submit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(form): Form<CafeForm>,
) -> AppResult<Response> {
    let mode = FormMode::Edit(id);
    let input = match form.normalize() {
        Ok(input) => input,
        Err(errors) => return Ok(rejected(&form, &errors, mode)),
    };

    match cafe::update(&state.db.pool, id, &input).await {
        Ok(_) => Ok(Redirect::to(LIST_PATH).into_response()),
        Err(RepoError::Duplicate(column)) => Ok(rejected(&form, &duplicate(&column)?, mode)),
        Err(e) => Err(e.into()),
    }
}

/// GET /delete - every cafe with a delete button
pub async fn delete_page(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let cafes = cafe::find_all(&state.db.pool).await?;
    Ok(views::delete::page(&cafes))
}

/// POST /delete/{id} (GET kept for old links) - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    cafe::delete(&state.db.pool, id).await?;
    Ok(Redirect::to(DELETE_PATH))
}

/// Re-render the submitted form with field errors; the store is untouched
fn rejected(form: &CafeForm, errors: &FormErrors, mode: FormMode) -> Response {
    tracing::debug!(errors = %errors, action = %mode.action(), "Cafe form rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        views::form::page(form, errors, mode),
    )
        .into_response()
}

/// Turn a UNIQUE violation into a field error, or a 409 for unknown columns
fn duplicate(column: &str) -> AppResult<FormErrors> {
    let spec = FIELDS
        .iter()
        .find(|spec| spec.name == column)
        .ok_or_else(|| AppError::conflict(format!("A cafe with this {column} already exists")))?;
    Ok(FormErrors::single(
        spec.name,
        format!("A cafe with this {} already exists.", spec.label),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_column_becomes_field_error() {
        let errors = duplicate("name").unwrap();
        assert_eq!(
            errors.field("name"),
            ["A cafe with this Cafe Name already exists.".to_string()]
        );
    }

    #[test]
    fn unknown_duplicate_column_is_conflict() {
        let err = duplicate("record").unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
