//! HTTP server for toolshelfd

use crate::catalog::CatalogStore;
use crate::config::{Config, CorsConfig, ServerConfig};
use crate::favorites::{Favorites, FavoritesStore};
use crate::routes;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub favorites: Favorites,
    pub start_time: Instant,
}

impl AppState {
    /// State with in-memory favorites
    pub fn new(catalog: CatalogStore) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            favorites: Favorites::in_memory(catalog.clone()),
            catalog,
            start_time: Instant::now(),
        }
    }

    /// State over a caller-provided favorites backend
    pub fn with_store(catalog: CatalogStore, store: Arc<dyn FavoritesStore>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            favorites: Favorites::new(catalog.clone(), store),
            catalog,
            start_time: Instant::now(),
        }
    }
}

/// Build the application router
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::tool_routes())
        .merge(routes::favorite_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Run the HTTP server until Ctrl+C
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let app = router(state, &config.cors);

    let listener = bind(&config.server).await?;
    info!("  Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind the listener; `host` may be a name such as `localhost`
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Cannot bind {}:{}", server.host, server.port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let server = ServerConfig {
            host: "localhost".into(),
            port: 0,
        };
        let listener = bind(&server).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_unresolvable_host() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 0,
        };
        assert!(bind(&server).await.is_err());
    }
}
