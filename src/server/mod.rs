use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod covid;
pub mod error;
pub mod jokes;
pub mod pages;
pub mod players;
pub mod quotes;
pub mod users;

/// Server state, built once at startup and injected into every handler
pub struct AppState {
    /// The rusqlite connection is Send but not Sync; one statement runs at a time
    pub store: Mutex<SqliteStore>,
    pub site_dir: PathBuf,
}

impl AppState {
    pub fn new(store: SqliteStore, site_dir: PathBuf) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
            site_dir,
        })
    }
}

/// Assemble the full application router.
///
/// The quote repository carries its own fixed origin policy and stays outside
/// the permissive CORS layer applied to the sibling APIs.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(jokes::router())
        .merge(users::router())
        .merge(players::router())
        .merge(covid::router())
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(quotes::router())
        .merge(api)
        .merge(pages::router(&state.site_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
