//! Add / edit form
//!
//! Rendered from `shared::models::FIELDS`, the same schema the submission
//! is validated against.

use axum::response::Html;
use shared::models::{CafeForm, FIELDS, FieldKind, FieldSpec, FormErrors, SeatBucket};
use std::fmt::Write;

use super::{escape, layout};

/// Whether the form creates a new cafe or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn action(self) -> String {
        match self {
            FormMode::Create => "/add".to_string(),
            FormMode::Edit(id) => format!("/edit/{id}"),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            FormMode::Create => "Add a new cafe into the database",
            FormMode::Edit(_) => "Edit cafe",
        }
    }
}

pub fn page(form: &CafeForm, errors: &FormErrors, mode: FormMode) -> Html<String> {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", mode.heading());
    let _ = writeln!(
        body,
        r#"<form method="post" action="{}" novalidate class="col-lg-6">"#,
        mode.action()
    );

    for spec in FIELDS {
        render_field(&mut body, spec, form.value(spec.name), errors.field(spec.name));
    }

    body.push_str(
        r#"<button type="submit" class="btn btn-primary">Submit</button>
</form>
<p class="mt-3"><a href="/cafes">See all cafes</a></p>"#,
    );

    let title = match mode {
        FormMode::Create => "Add Cafe",
        FormMode::Edit(_) => "Edit Cafe",
    };
    layout(title, &body)
}

fn render_field(out: &mut String, spec: FieldSpec, value: &str, messages: &[String]) {
    let invalid = if messages.is_empty() { "" } else { " is-invalid" };
    let _ = writeln!(out, r#"<div class="mb-3">"#);
    let _ = writeln!(
        out,
        r#"<label class="form-label" for="{name}">{label}</label>"#,
        name = spec.name,
        label = escape(spec.label),
    );

    match spec.kind {
        FieldKind::Text | FieldKind::Url | FieldKind::Price => {
            let input_type = match spec.kind {
                FieldKind::Url => "url",
                _ => "text",
            };
            let _ = writeln!(
                out,
                r#"<input class="form-control{invalid}" type="{input_type}" id="{name}" name="{name}" value="{value}">"#,
                name = spec.name,
                value = escape(value),
            );
        }
        FieldKind::YesNo => {
            render_select(out, spec.name, invalid, value, &["Yes", "No"]);
        }
        FieldKind::Seats => {
            let labels: Vec<&str> = SeatBucket::ALL.iter().map(|b| b.label()).collect();
            render_select(out, spec.name, invalid, value, &labels);
        }
    }

    for message in messages {
        let _ = writeln!(
            out,
            r#"<div class="invalid-feedback d-block">{}</div>"#,
            escape(message)
        );
    }
    out.push_str("</div>\n");
}

fn render_select(out: &mut String, name: &str, invalid: &str, current: &str, choices: &[&str]) {
    let _ = writeln!(
        out,
        r#"<select class="form-select{invalid}" id="{name}" name="{name}">"#
    );
    for choice in choices {
        let selected = if *choice == current.trim() { " selected" } else { "" };
        let _ = writeln!(
            out,
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = escape(choice),
        );
    }
    out.push_str("</select>\n");
}
