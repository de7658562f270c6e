//! Integration tests for the static bundle host

#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use medinest_core::{ShellConfig, ToastPosition, UnknownRoutePolicy};
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>medinest shell</body></html>";

fn bundle() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dir.path().join("medinest-web.js"), "export default {};").unwrap();
    dir
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_deep_links_serve_index() {
    let dist = bundle();

    for uri in ["/", "/dashboard", "/login", "/upload", "/no/such/page"] {
        let router = medinest_web::create_router(dist.path(), ShellConfig::default());
        let (status, content_type, body) = get(router, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(content_type.unwrap_or_default().contains("text/html"), "{uri}");
        assert_eq!(body, INDEX, "{uri}");
    }
}

#[tokio::test]
async fn test_assets_are_served_directly() {
    let dist = bundle();
    let router = medinest_web::create_router(dist.path(), ShellConfig::default());

    let (status, _, body) = get(router, "/medinest-web.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default {};");
}

#[tokio::test]
async fn test_health_endpoint() {
    let dist = bundle();
    let router = medinest_web::create_router(dist.path(), ShellConfig::default());

    let (status, content_type, body) = get(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("application/json"));
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_routes_endpoint_lists_access() {
    let dist = bundle();
    let router = medinest_web::create_router(dist.path(), ShellConfig::default());

    let (status, _, body) = get(router, "/api/routes").await;
    assert_eq!(status, StatusCode::OK);

    let routes: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(routes.len(), 12);
    assert_eq!(routes[0]["path"], "/login");
    assert_eq!(routes[0]["guarded"], false);
    assert_eq!(routes[3]["view"], "Dashboard");
    assert_eq!(routes[3]["guarded"], true);
}

#[tokio::test]
async fn test_nav_endpoint_keeps_order() {
    let dist = bundle();
    let router = medinest_web::create_router(dist.path(), ShellConfig::default());

    let (_, _, body) = get(router, "/api/nav").await;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();

    let labels: Vec<_> = entries
        .iter()
        .map(|e| e["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("Home"));
    assert_eq!(labels.last().map(String::as_str), Some("Profile"));
    assert_eq!(labels.len(), 10);
}

#[tokio::test]
async fn test_config_endpoint_serves_loaded_file() {
    let dist = bundle();
    let path = dist.path().join("shell.json");
    std::fs::write(
        &path,
        r#"{"brand": "MediNest Beta", "unknown_route": "home", "toast_position": "bottom-left", "session_ttl_hours": 12}"#,
    )
    .unwrap();
    let config = ShellConfig::load(&path).unwrap();

    let router = medinest_web::create_router(dist.path(), config.clone());
    let (status, content_type, body) = get(router, "/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("application/json"));

    let served: ShellConfig = serde_json::from_str(&body).unwrap();
    assert_eq!(served, config);
    assert_eq!(served.unknown_route, UnknownRoutePolicy::Home);
    assert_eq!(served.toast_position, ToastPosition::BottomLeft);
    assert_eq!(served.session_ttl_hours, Some(12));
}
