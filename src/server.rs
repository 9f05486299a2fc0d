//! Minimal HTTP host for the day page.
//!
//! - `GET /?date=YYYY-MM-DD` renders the page. A malformed query string is
//!   treated like a missing one, so the page always answers 200 unless the
//!   image map cannot be read.
//! - `GET /health` answers `OK`.
//! - Anything else is served read-only from the plot directory (plot images,
//!   map fragments, favicon).

use crate::viewer::{Viewer, ViewerError};
use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    date: Option<String>,
}

/// Failure while building a page; logged and answered with 500.
struct PageError(String);

impl From<ViewerError> for PageError {
    fn from(e: ViewerError) -> Self {
        PageError(e.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "failed to render day page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

async fn day_page(
    State(viewer): State<Arc<Viewer>>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Html<Vec<u8>>, PageError> {
    let date = query.ok().and_then(|Query(q)| q.date);
    let page = tokio::task::spawn_blocking(move || viewer.render(date.as_deref()))
        .await
        .map_err(|e| PageError(e.to_string()))??;
    Ok(Html(page))
}

/// Build the application router.
pub fn router(viewer: Arc<Viewer>) -> Router {
    let files = ServeDir::new(&viewer.config().plot_dir);
    Router::new()
        .route("/", get(day_page))
        .route("/health", get(|| async { "OK" }))
        .with_state(viewer)
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port` and serve until Ctrl+C.
pub async fn serve(viewer: Viewer, host: &str, port: u16) -> Result<(), ServeError> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let plot_dir = viewer.config().plot_dir.clone();
    let app = router(Arc::new(viewer));

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, plot_dir = %plot_dir.display(), "serving fireplot viewer");
    println!("Serving {} at http://{addr}", plot_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
