use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes::{build_router, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server(base_path: &str) -> anyhow::Result<TestApp> {
    let app = build_router(AppState::in_memory(false, "Categories API"), base_path);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}{}", addr.ip(), addr.port(), base_path);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_crud_over_tcp() -> anyhow::Result<()> {
    let app = start_server("/api/v1").await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/categories/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Categories API is healthy");

    let res = c.post(format!("{}/categories", app.base_url))
        .json(&json!({"name": "Books", "description": "All books"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["id"], 1);

    let res = c.put(format!("{}/categories/1", app.base_url))
        .json(&json!({"name": "Comics", "description": "Graphic novels"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/categories/1", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["name"], "Comics");

    let res = c.delete(format!("{}/categories/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/categories/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_creates_get_distinct_ids() -> anyhow::Result<()> {
    let app = start_server("").await?;
    let c = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let c = c.clone();
        let url = format!("{}/categories", app.base_url);
        tasks.push(tokio::spawn(async move {
            let res = c.post(url).json(&json!({"name": format!("c{i}")})).send().await?;
            let body = res.json::<serde_json::Value>().await?;
            Ok::<i64, reqwest::Error>(body["data"]["id"].as_i64().unwrap_or_default())
        }));
    }
    let mut ids = Vec::new();
    for t in tasks {
        ids.push(t.await??);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    Ok(())
}
