//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    assessment::assessment_page,
    clinical::{clinical_page, clinical_submit},
    home::home,
    lifestyle::{lifestyle_page, lifestyle_submit},
    marketing::{lifestyle_story, vision_page},
    modules::modules_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",              get(home))
        .route("/assessment",    get(assessment_page))
        .route("/modules",       get(modules_page))
        .route("/lifestyle",     get(lifestyle_story))
        .route("/vision",        get(vision_page))
        .route("/organ-age",     get(clinical_page).post(clinical_submit))
        .route("/lifestyle-age", get(lifestyle_page).post(lifestyle_submit))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
