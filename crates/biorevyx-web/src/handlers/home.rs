//! Hero landing page.

use axum::{extract::State, response::Html};

use crate::state::SharedState;

/// Navigation HTML shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    Html(render_home(&state.config.site.title, &state.config.site.tagline))
}

fn render_home(title: &str, tagline: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content hero">
    <div class="hero-copy">
        <h2>Transform <span class="text-gradient">Healthcare</span> Efficiency</h2>
        <h2>with Cutting-Edge Technology</h2>
        <p class="text-muted">{tagline}</p>
        <div class="hero-actions">
            <a href="/assessment" class="btn btn-primary btn-pill">Get Started &#10140;</a>
        </div>
    </div>
</main>
</body>
</html>"#,
        title = title,
        tagline = tagline,
        nav = NAV_HTML,
    )
}
