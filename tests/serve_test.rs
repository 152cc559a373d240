//! End-to-end tests over a real listener.

use std::net::SocketAddr;

use reqwest::StatusCode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use sassy::{Sassy, SassyConfig, StylesheetServer};

mod common;

async fn start(config: SassyConfig) -> (SocketAddr, oneshot::Sender<()>, tempfile::TempDir) {
    let dir = common::assets();
    let sassy = Sassy::new(dir.path(), config).unwrap();
    let server = StylesheetServer::new(sassy);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = server
            .run_until(listener, async {
                let _ = rx.await;
            })
            .await;
    });

    (addr, tx, dir)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_serves_and_revalidates_over_tcp() {
    let (addr, shutdown, _dir) = start(SassyConfig::default().with_mount("/stylesheet")).await;
    let client = client();

    let res = client
        .get(format!("http://{addr}/stylesheet/one.css"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/css;charset=utf-8");
    let etag = res.headers()["etag"].to_str().unwrap().to_string();
    let body = res.text().await.unwrap();
    assert!(body.contains("color: #333"));

    let res = client
        .get(format!("http://{addr}/stylesheet/one.css"))
        .header("If-None-Match", &etag)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_MODIFIED);

    let res = client
        .head(format!("http://{addr}/stylesheet/one.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["etag"], etag.as_str());

    let _ = shutdown.send(());
}

#[tokio::test]
async fn test_fallback_is_404_over_tcp() {
    let (addr, shutdown, _dir) = start(SassyConfig::default()).await;
    let client = client();

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("http://{addr}/missing.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .post(format!("http://{addr}/one.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()["allow"], "GET, HEAD, OPTIONS");

    let _ = shutdown.send(());
}
