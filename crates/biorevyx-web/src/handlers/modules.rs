//! "Core Biological Aging Modules" marketing page.

use axum::{extract::State, response::Html};

use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

pub async fn modules_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_modules(&state.config.site.title))
}

fn render_modules(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Modules — {title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-intro">
        <h1>Core Biological Aging Modules</h1>
        <p class="text-muted">{title} analyzes organ-level biological age using multi-parameter
        models combining physiological, metabolic, and lifestyle signals.</p>
    </div>

    <div class="card module-card">
        <h2>&#10084; Cardiovascular Aging Module</h2>
        <div class="module-section">
            <h4>What it Measures</h4>
            <ul>
                <li>HRV</li>
                <li>Resting heart rate</li>
                <li>Blood pressure variability</li>
            </ul>
        </div>
        <div class="module-section">
            <h4>Why It Ages Faster</h4>
            <p class="text-muted">Sustained sympathetic load, poor sleep, and metabolic stress
            raise resting heart rate and flatten heart rate variability years before symptoms
            appear.</p>
        </div>
        <div class="module-section">
            <h4>Correction Strategy</h4>
            <p class="text-muted">Zone-2 endurance work, stress-load management, and consistent
            sleep timing move resting heart rate back toward the reference ideal.</p>
        </div>
    </div>
</main>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
    )
}
