//! End-to-end tests driving the router in-process.

use aurora_common::AuroraConfig;
use aurora_web::router::build_router;
use aurora_web::state::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn app() -> Router {
    let mut config = AuroraConfig::default();
    config.search.simulated_latency_ms = 0;
    build_router(AppState::new(config).unwrap())
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut req = Request::builder().uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    app.clone().oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

async fn post_search(app: &Router, body: &str, cookie: Option<&str>) -> Response {
    let mut req = Request::builder()
        .method("POST")
        .uri("/search")
        .header(header::CONTENT_TYPE, FORM);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    app.clone()
        .oneshot(req.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(res: Response) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_text(res: Response) -> String {
    String::from_utf8(body_bytes(res).await).unwrap()
}

/// "aurora_session=<uuid>" from a Set-Cookie header.
fn session_cookie(res: &Response) -> String {
    let value = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    value.split(';').next().unwrap().to_string()
}

async fn session_with_run(app: &Router) -> String {
    let res = get(app, "/", None).await;
    let cookie = session_cookie(&res);
    let res = post_search(app, "target=BRAF+%28melanoma%29&max_toxicity=1&top_n=5", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    cookie
}

#[tokio::test]
async fn test_targets_catalogue() {
    let app = app();
    let res = get(&app, "/api/targets", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
    let targets = json.as_array().unwrap();
    assert_eq!(targets.len(), 10);
    assert_eq!(targets[2]["label"], "BRAF (melanoma)");
    assert!(targets[0]["seed"].as_u64().unwrap() < 1_000_000);
}

#[tokio::test]
async fn test_candidates_are_ranked_batch() {
    let app = app();
    let res = get(&app, "/api/candidates?count=3&seed=42", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mol-003", "Mol-002", "Mol-001"]);
    assert_eq!(json[0]["status"], "reserve");
}

#[tokio::test]
async fn test_candidates_rejects_bad_count() {
    let app = app();
    assert_eq!(get(&app, "/api/candidates?count=0", None).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, "/api/candidates?count=5000", None).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shortlist_endpoint() {
    let app = app();
    let res = get(&app, "/api/shortlist?target=ALK&max_toxicity=0.5&top_n=4", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
    let shortlist = json["shortlist"].as_array().unwrap();
    assert!(shortlist.len() <= 4);
    for entry in shortlist {
        assert!(entry["toxicity"].as_f64().unwrap() <= 0.5);
    }
    assert_eq!(json["pool"].as_array().unwrap().len(), 10);

    let res = get(&app, "/api/shortlist?target=ALK&top_n=42", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_icon_is_deterministic_svg() {
    let app = app();
    let res = get(&app, "/api/icons/Mol-001", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let first = body_text(res).await;
    assert!(first.contains("<svg"));

    let again = body_text(get(&app, "/api/icons/Mol-001", None).await).await;
    assert_eq!(first, again);

    assert_eq!(get(&app, "/api/icons/Mol-001?size=0", None).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_first_visit_mints_session_without_results() {
    let app = app();
    let res = get(&app, "/", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(session_cookie(&res).starts_with("aurora_session="));

    let html = body_text(res).await;
    assert!(html.contains("Run search"));
    assert!(html.contains("BindingDB"));
    assert!(!html.contains("section-results"));
}

#[tokio::test]
async fn test_search_then_page_shows_results() {
    let app = app();
    let cookie = session_with_run(&app).await;

    let res = get(&app, "/", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(res).await;
    assert!(html.contains("section-results"));
    assert!(html.contains("Safety is computed from toxicity."));
    assert_eq!(html.matches("class=\"molcard\"").count(), 5);
    assert_eq!(html.matches("<tr class=\"highlight\">").count(), 3);
    assert_eq!(html.matches("<rect").count(), 15);
}

#[tokio::test]
async fn test_search_rejects_invalid_input() {
    let app = app();
    let res = post_search(&app, "target=Nope&max_toxicity=0.5&top_n=5", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_search(&app, "target=BRAF+%28melanoma%29&max_toxicity=0.5&top_n=20", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exports_require_a_run() {
    let app = app();
    assert_eq!(get(&app, "/export/csv", None).await.status(), StatusCode::CONFLICT);
    assert_eq!(get(&app, "/export/pdf", None).await.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_exports_after_run() {
    let app = app();
    let cookie = session_with_run(&app).await;

    let res = get(&app, "/export/csv", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"aurora_candidates.csv\""
    );
    let csv = body_text(res).await;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("#,Molecule,Activity,Toxicity,Composite score,Status"));
    assert_eq!(lines.count(), 5);

    let res = get(&app, "/export/pdf", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
    assert!(body_bytes(res).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = app();
    let with_run = session_with_run(&app).await;

    let res = get(&app, "/", None).await;
    let other = session_cookie(&res);
    assert_ne!(other, with_run);

    let html = body_text(get(&app, "/", Some(&other)).await).await;
    assert!(!html.contains("section-results"));
    assert_eq!(get(&app, "/export/csv", Some(&other)).await.status(), StatusCode::CONFLICT);

    let html = body_text(get(&app, "/", Some(&with_run)).await).await;
    assert!(html.contains("section-results"));
    assert_eq!(get(&app, "/export/csv", Some(&with_run)).await.status(), StatusCode::OK);
}
