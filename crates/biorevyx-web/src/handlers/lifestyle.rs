//! Lifestyle Biological Age Analyzer — form page and submit handler.

use axum::{extract::State, response::Html, Form};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use biorevyx_bioage::metrics::{FieldError, LifestyleForm, LIFESTYLE_BOUNDS};
use biorevyx_bioage::reference::LifestyleReference;
use biorevyx_bioage::scorer::score_lifestyle;

use crate::handlers::home::NAV_HTML;
use crate::render::{field_input, results_card};
use crate::state::SharedState;

/// GET /lifestyle-age — empty form.
pub async fn lifestyle_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_lifestyle(
        &state.config.site.title,
        &LifestyleForm::default(),
        &[],
        String::new(),
    ))
}

/// POST /lifestyle-age — validate, score, re-render with results inline.
pub async fn lifestyle_submit(
    State(state): State<SharedState>,
    Form(form): Form<LifestyleForm>,
) -> Html<String> {
    match form.validate() {
        Ok(metrics) => {
            let report = score_lifestyle(&metrics, &LifestyleReference::default());
            let assessment_id = Uuid::new_v4();
            info!(
                %assessment_id,
                panel = "lifestyle",
                overall = report.overall,
                status = report.status.label(),
                "assessment completed"
            );
            Html(render_lifestyle(
                &state.config.site.title,
                &form,
                &[],
                results_card(&report, Utc::now()),
            ))
        }
        Err(errors) => Html(render_lifestyle(
            &state.config.site.title,
            &form,
            &errors,
            String::new(),
        )),
    }
}

fn render_lifestyle(
    title: &str,
    form: &LifestyleForm,
    errors: &[FieldError],
    results_html: String,
) -> String {
    let fields: String = LIFESTYLE_BOUNDS
        .iter()
        .map(|bounds| field_input(bounds, form.value(bounds.field), errors))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Lifestyle Biological Age Analyzer — {title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <h1 class="page-title">Lifestyle Biological Age Analyzer</h1>

    <div class="card form-card">
        <form method="POST" action="/lifestyle-age" class="form-grid">
            {fields}
            <button type="submit" class="btn btn-primary btn-wide">Analyze</button>
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
