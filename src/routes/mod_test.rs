use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn config_with_assets(assets_dir: PathBuf) -> ServerConfig {
    ServerConfig { host: crate::config::DEFAULT_HOST, port: 0, assets_dir }
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

fn scratch_assets_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("showreel-assets-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = static_routes(&config_with_assets(scratch_assets_dir("healthz")));
    assert_eq!(status_of(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn assets_serves_files_from_configured_dir() {
    let dir = scratch_assets_dir("serve");
    std::fs::write(dir.join("logo.png"), b"\x89PNG").unwrap();

    let router = static_routes(&config_with_assets(dir.clone()));
    assert_eq!(status_of(router, "/assets/logo.png").await, StatusCode::OK);

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn unknown_asset_returns_not_found() {
    let router = static_routes(&config_with_assets(scratch_assets_dir("missing")));
    assert_eq!(status_of(router, "/assets/nope.jpg").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let router = static_routes(&config_with_assets(scratch_assets_dir("unknown")));
    assert_eq!(status_of(router, "/this-route-does-not-exist").await, StatusCode::NOT_FOUND);
}
