//! # Quoteboard - demo portfolio backend
//!
//! A small web backend serving a handful of unrelated demo resources over a
//! shared SQLite database.
//!
//! Quoteboard provides:
//! - The quote repository: submit a quote with an opinion, list them all
//! - Sibling resources registered as independent routers (jokes, users,
//!   players, covid snapshot)
//! - A fixed cross-origin policy for the GitHub Pages frontend
//! - Static HTML pages with a dedicated not-found fallback
//! - A CLI for serving, seeding demo data, and inspecting the database

pub mod config;
pub mod covid;
pub mod joke;
pub mod player;
pub mod quote;
pub mod server;
pub mod storage;
pub mod user;

// Re-exports for convenient access
pub use quote::{NewQuote, Quote, SubmitQuote};
pub use storage::SqliteStore;

/// Result type alias for Quoteboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Quoteboard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
