use std::net::SocketAddr;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::auth::ServerState;
use crate::routes::build_router;

fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port),
        Err(_) => {
            let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .context("invalid server bind address")
}

fn jwt_secret_from_env() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(s) if !s.is_empty() => s,
        _ => {
            warn!(event = "jwt_secret_default", "JWT_SECRET not set, using development default");
            "dev-secret-change-me".to_string()
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let db = models::db::connect().await.context("database connection failed")?;
    info!(event = "db_connected", "database connection established");

    let state = ServerState { db, jwt_secret: jwt_secret_from_env() };

    // The frontends are served from other origins during development
    let cors = CorsLayer::very_permissive();
    let app = build_router(cors, state);

    let addr = load_bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(event = "listening", %addr, "http server ready");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
