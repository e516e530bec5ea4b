use std::path::{Path, PathBuf};

use super::*;

// =============================================================
// Helpers
// =============================================================

fn bundle_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("content-brief-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>brief plugin</html>").unwrap();
    std::fs::write(dir.join("plugin.css"), ".hidden { display: none; }").unwrap();
    dir
}

async fn spawn_server(dir: &Path) -> String {
    let config = ServerConfig { port: 0, dist_dir: dir.to_path_buf() };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(&config);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================
// Routes
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = bundle_dir("healthz");
    let base = spawn_server(&dir).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn root_serves_bundle_index() {
    let dir = bundle_dir("index");
    let base = spawn_server(&dir).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "<html>brief plugin</html>");
}

#[tokio::test]
async fn bundle_assets_are_served() {
    let dir = bundle_dir("assets");
    let base = spawn_server(&dir).await;

    let resp = reqwest::get(format!("{base}/plugin.css")).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains(".hidden"));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let dir = bundle_dir("missing");
    let base = spawn_server(&dir).await;

    let resp = reqwest::get(format!("{base}/nope.wasm")).await.unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let dir = bundle_dir("cors");
    let base = spawn_server(&dir).await;

    let resp = reqwest::Client::new()
        .get(format!("{base}/index.html"))
        .header("Origin", "https://app.storyblok.com")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}
