//! Organ Biological Age Detection System — clinical panel form and submit.

use axum::{extract::State, response::Html, Form};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use biorevyx_bioage::metrics::{ClinicalForm, FieldError, CLINICAL_BOUNDS};
use biorevyx_bioage::reference::ClinicalReference;
use biorevyx_bioage::scorer::score_clinical;

use crate::handlers::home::NAV_HTML;
use crate::render::{field_input, results_card};
use crate::state::SharedState;

/// GET /organ-age — empty form with the age field prefilled.
pub async fn clinical_page(State(state): State<SharedState>) -> Html<String> {
    let form = ClinicalForm { age: Some(20.0), ..ClinicalForm::default() };
    Html(render_clinical(&state.config.site.title, &form, &[], String::new()))
}

/// POST /organ-age — validate, score, re-render with results inline.
pub async fn clinical_submit(
    State(state): State<SharedState>,
    Form(form): Form<ClinicalForm>,
) -> Html<String> {
    match form.validate() {
        Ok(metrics) => {
            let report = score_clinical(&metrics, &ClinicalReference::default());
            let assessment_id = Uuid::new_v4();
            info!(
                %assessment_id,
                panel = "clinical",
                overall = report.overall,
                status = report.status.label(),
                "assessment completed"
            );
            Html(render_clinical(
                &state.config.site.title,
                &form,
                &[],
                results_card(&report, Utc::now()),
            ))
        }
        Err(errors) => Html(render_clinical(
            &state.config.site.title,
            &form,
            &errors,
            String::new(),
        )),
    }
}

fn render_clinical(
    title: &str,
    form: &ClinicalForm,
    errors: &[FieldError],
    results_html: String,
) -> String {
    let fields: String = CLINICAL_BOUNDS
        .iter()
        .map(|bounds| field_input(bounds, form.value(bounds.field), errors))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Organ Biological Age — {title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <h1 class="page-title">Enter your health parameters</h1>

    <div class="card form-card">
        <form method="POST" action="/organ-age" class="form-grid">
            {fields}
            <button type="submit" class="btn btn-primary btn-wide">Analyze Organ Age</button>
        </form>
    </div>

    {results}
</main>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        fields = fields,
        results = results_html,
    )
}
