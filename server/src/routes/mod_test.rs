use super::*;
use crate::config::ServerConfig;

#[tokio::test]
async fn healthz_returns_ok() {
    let config = ServerConfig { port: 3000, backend_url: "http://127.0.0.1:9".into(), proxy_timeout_secs: 1 };
    let app = api_routes(AppState::new(&config).unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
