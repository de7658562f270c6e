//! Static bundle host using Axum
//!
//! Serves the Trunk output directory. Any GET that does not hit a file gets
//! `index.html`, so deep links such as `/dashboard` reach the client router.

use anyhow::{Context, Result};
use axum::{extract::State, response::Json, routing::get, Router};
use medinest_core::{
    nav_descriptors, route_descriptors, NavDescriptor, RouteDescriptor, ShellConfig,
};
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Where and what to serve
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub dist: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    /// Handed to the browser app through `/api/config`
    pub config: ShellConfig,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            dist: PathBuf::from("crates/medinest-web/dist"),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            config: ShellConfig::default(),
        }
    }
}

/// Create the web router for a bundle directory
pub fn create_router(dist: &Path, config: ShellConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Fallback keeps ServeFile's 200 status
    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/routes", get(routes_handler))
        .route("/api/nav", get(nav_handler))
        .route("/api/config", get(config_handler))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(config))
}

/// Run the web server
pub async fn run(options: ServeOptions) -> Result<()> {
    if !options.dist.join("index.html").exists() {
        warn!(
            dist = %options.dist.display(),
            "no index.html in bundle directory; run 'trunk build' in crates/medinest-web"
        );
    }

    let router = create_router(&options.dist, options.config);
    let addr = SocketAddr::new(options.host, options.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Web server terminated")?;

    Ok(())
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn routes_handler() -> Json<Vec<RouteDescriptor>> {
    Json(route_descriptors())
}

async fn nav_handler() -> Json<Vec<NavDescriptor>> {
    Json(nav_descriptors())
}

async fn config_handler(State(config): State<Arc<ShellConfig>>) -> Json<ShellConfig> {
    Json(config.as_ref().clone())
}
