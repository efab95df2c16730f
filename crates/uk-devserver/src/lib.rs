//! Dev/preview server: serves the production output directory and a
//! server-rendered component gallery.

pub mod gallery;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;
use uk_core::config::BuildConfig;

#[derive(Debug, Clone)]
pub struct DevServerState {
    pub dist_dir: PathBuf,
    pub public_url: String,
    gallery_html: Arc<str>,
}

impl DevServerState {
    pub fn new(dist_dir: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            public_url: public_url.into(),
            gallery_html: gallery::page().into(),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(&config.build.out_dir, &config.build.public_url)
    }
}

/// Build the router: gallery and health routes, then the static output
/// directory with an `index.html` fallback for client-side paths.
pub fn app(state: &DevServerState) -> Router {
    let static_files = ServeDir::new(&state.dist_dir)
        .fallback(ServeFile::new(state.dist_dir.join("index.html")));

    let router = Router::new()
        .route("/__health", get(|| async { "ok" }))
        .route("/__gallery", get(gallery_handler))
        .with_state(state.clone());

    let prefix = state.public_url.trim_end_matches('/');
    let router = if prefix.is_empty() {
        router.fallback_service(static_files)
    } else {
        router.nest_service(prefix, static_files)
    };
    router.layer(TraceLayer::new_for_http())
}

async fn gallery_handler(State(state): State<DevServerState>) -> Html<String> {
    Html(state.gallery_html.to_string())
}

/// Bind to the configured address and serve until ctrl-c.
pub async fn serve(config: BuildConfig) -> Result<()> {
    let state = DevServerState::from_config(&config);
    if !state.dist_dir.join("index.html").exists() {
        tracing::warn!(
            dist_dir = %state.dist_dir.display(),
            "no index.html in output directory; only the gallery will render"
        );
    }

    let addr = config.serve_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind dev server on {addr}"))?;

    info!(dist_dir = %state.dist_dir.display(), "serving output directory");
    info!("dev server listening on http://{addr}");
    info!("gallery: http://{addr}/__gallery");

    axum::serve(listener, app(&state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("dev server error")?;

    info!("dev server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    info!("ctrl-c received, shutting down");
}
