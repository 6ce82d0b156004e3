#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "crm-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    let state = state::AppState::new(&config).map_err(|e| format!("http client: {e}"))?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| format!("failed to bind port {}: {e}", config.port))?;

    tracing::info!(port = config.port, backend = %config.backend_url, "crm-server listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
