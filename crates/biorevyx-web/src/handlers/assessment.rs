//! Assessment catalogue — the two calculator cards.

use axum::{extract::State, response::Html};
use biorevyx_common::catalogue::PANELS;

use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

pub async fn assessment_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_assessment(&state.config.site.title))
}

fn render_assessment(title: &str) -> String {
    let cards: String = PANELS
        .iter()
        .map(|panel| {
            let items: String = panel
                .parameters
                .iter()
                .map(|p| format!(r#"<li><span class="check">&#10003;</span> {p}</li>"#))
                .collect();
            format!(
                r#"<div class="card panel-card">
        <div>
            <h3>{heading}</h3>
            <p>{blurb}</p>
            <ul class="check-list">
                {items}
            </ul>
        </div>
        <a href="{href}" class="btn btn-primary btn-pill">Check age of your organs &#10140;</a>
    </div>"#,
                heading = panel.heading,
                blurb = panel.blurb,
                items = items,
                href = panel.href,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Assessments — {title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-intro">
        <p class="eyebrow">Assessments</p>
        <h1>Check your <span class="text-gradient">Organs' Age</span></h1>
    </div>
    <div class="panel-grid">
        {cards}
    </div>
</main>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        cards = cards,
    )
}
