//! Router-level integration tests: drive the site the way a browser does.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use biorevyx_config::Config;
use biorevyx_test_utils::{clinical_body, ideal_clinical_form, ideal_lifestyle_form, lifestyle_body};
use biorevyx_web::router::build_router;
use biorevyx_web::state::AppState;

fn app() -> Router {
    build_router(AppState::new(Config::default()))
}

async fn get(path: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(path: &str, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_renders_hero() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Transform"));
    assert!(html.contains("Bio Revive 360"));
    assert!(html.contains("Get Started"));
}

#[tokio::test]
async fn assessment_lists_both_panels() {
    let (status, html) = get("/assessment").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Organ Biological Age Detection System"));
    assert!(html.contains("Epigenetic Multi-Organ Biological Aging Simulation"));
    assert!(html.contains(r#"href="/organ-age""#));
    assert!(html.contains(r#"href="/lifestyle-age""#));
}

#[tokio::test]
async fn marketing_pages_render() {
    for path in ["/modules", "/lifestyle", "/vision"] {
        let (status, html) = get(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(html.contains("Bio Revive 360"), "{path}");
    }
}

#[tokio::test]
async fn clinical_form_carries_bounds_and_prefill() {
    let (status, html) = get("/organ-age").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"name="creatinine""#));
    assert!(html.contains(r#"step="0.01""#));
    // Age field is prefilled at 20
    assert!(html.contains(r#"value="20""#));
    assert!(!html.contains("Results"));
}

#[tokio::test]
async fn lifestyle_ideal_post_is_optimal() {
    let body = lifestyle_body(&ideal_lifestyle_form(30.0));
    let (status, html) = post_form("/lifestyle-age", body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Full Body Aging Index"));
    assert!(html.contains("30.0"));
    assert!(html.contains("Optimal Aging"));
}

#[tokio::test]
async fn lifestyle_underage_post_shows_field_message() {
    let body = lifestyle_body(&ideal_lifestyle_form(17.0));
    let (status, html) = post_form("/lifestyle-age", body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Minimum age is 18."));
    assert!(!html.contains("Full Body Aging Index"));
}

#[tokio::test]
async fn lifestyle_missing_field_shows_required_message() {
    let mut form = ideal_lifestyle_form(30.0);
    form.sleep_hours = None;
    let (status, html) = post_form("/lifestyle-age", lifestyle_body(&form)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sleep hours are required."));
    assert!(!html.contains("Full Body Aging Index"));
}

#[tokio::test]
async fn clinical_ideal_post_is_optimal() {
    let body = clinical_body(&ideal_clinical_form(40.0));
    let (status, html) = post_form("/organ-age", body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Full Body Aging Index"));
    assert!(html.contains("40.0"));
    assert!(html.contains("Optimal Aging"));
}

#[tokio::test]
async fn clinical_degraded_post_accelerates() {
    let mut form = ideal_clinical_form(30.0);
    form.creatinine = Some(1.7);
    form.alt_liver = Some(52.0);
    let (status, html) = post_form("/organ-age", clinical_body(&form)).await;
    assert_eq!(status, StatusCode::OK);
    // Kidney and liver saturate a full tolerance unit out; the overall gap
    // lands in the Mild band.
    assert!(html.contains("Mild Acceleration"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get("/OrganBiologicalAge3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
