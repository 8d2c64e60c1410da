//! Lifestyle and Vision marketing pages.

use axum::{extract::State, response::Html};

use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

pub async fn lifestyle_story(State(state): State<SharedState>) -> Html<String> {
    Html(render_page(
        &state.config.site.title,
        "Lifestyle",
        "Your habits write your biology",
        "Sleep, stress, screen time, and strength are the levers you actually control. \
         The lifestyle simulation shows how each one is currently pulling your organ ages \
         up or down, and by how much.",
        "/lifestyle-age",
        "Run the lifestyle simulation",
    ))
}

pub async fn vision_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_page(
        &state.config.site.title,
        "Vision",
        "Aging is measurable. Measured things improve.",
        "We believe organ-level biological age should be as routine a number as body weight. \
         Bio Revive 360 exists to make that number visible, understandable, and actionable \
         for everyone.",
        "/assessment",
        "Start an assessment",
    ))
}

fn render_page(
    title: &str,
    page: &str,
    heading: &str,
    body: &str,
    cta_href: &str,
    cta_label: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{page} — {title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-intro">
        <p class="eyebrow">{page}</p>
        <h1>{heading}</h1>
        <p class="text-muted">{body}</p>
        <div class="hero-actions">
            <a href="{cta_href}" class="btn btn-primary btn-pill">{cta_label} &#10140;</a>
        </div>
    </div>
</main>
</body>
</html>"#,
        title = title,
        page = page,
        heading = heading,
        body = body,
        cta_href = cta_href,
        cta_label = cta_label,
        nav = NAV_HTML,
    )
}
