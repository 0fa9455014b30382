use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth};
use service::{
    auth::service::{AuthConfig, AuthService},
    file::catalog_store::CatalogStore,
    runtime,
};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_storage() -> configs::StorageConfig {
    let mut storage = configs::load_default().map(|cfg| cfg.storage).unwrap_or_default();
    storage.normalize_from_env();
    storage
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let storage = load_storage();
    let backup_dir = storage.backup_path();
    runtime::ensure_env(&storage.data_dir, &backup_dir.to_string_lossy()).await?;

    // 文档存储（文件持久化 data/db.json）
    let store = CatalogStore::open(storage.document_path()).await?;

    // JWT secret
    let jwt_secret =
        std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string());
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        AuthConfig { jwt_secret, token_hours: 12 },
    ));

    let state = auth::ServerState {
        store: Arc::clone(&store),
        auth: auth_service,
        backup_dir,
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
