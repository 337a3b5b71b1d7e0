//! HTML pages, static assets, and the not-found fallback

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::server::AppState;

pub fn router(site_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/table/", get(table))
        .nest_service("/static", ServeDir::new(site_dir.join("static")))
        .fallback(not_found)
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    page(&state, "index.html", StatusCode::OK).await
}

async fn table(State(state): State<Arc<AppState>>) -> Response {
    page(&state, "table.html", StatusCode::OK).await
}

/// Unmatched routes land here; renders the site's 404 page with status 404
async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    match read_page(&state, "404.html").await {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

async fn page(state: &AppState, name: &str, status: StatusCode) -> Response {
    match read_page(state, name).await {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!("failed to read page {}: {}", name, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "page unavailable").into_response()
        }
    }
}

async fn read_page(state: &AppState, name: &str) -> std::io::Result<String> {
    tokio::fs::read_to_string(state.site_dir.join(name)).await
}
