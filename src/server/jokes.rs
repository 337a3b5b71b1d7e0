//! Joke blueprint: list, random pick, and audience reactions

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::joke::Joke;
use crate::server::AppState;
use crate::server::error::ApiError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/jokes", get(list_jokes))
        .route("/api/jokes/random", get(random_joke))
        .route("/api/jokes/like/{id}", put(like_joke))
        .route("/api/jokes/jeer/{id}", put(jeer_joke))
}

async fn list_jokes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Joke>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.all_jokes()?))
}

async fn random_joke(State(state): State<Arc<AppState>>) -> Result<Json<Joke>, ApiError> {
    let store = state.store.lock().await;
    store
        .random_joke()?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("no jokes seeded".to_string()))
}

async fn like_joke(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Joke>, ApiError> {
    let store = state.store.lock().await;
    store
        .like_joke(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("joke {id}")))
}

async fn jeer_joke(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Joke>, ApiError> {
    let store = state.store.lock().await;
    store
        .jeer_joke(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("joke {id}")))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::joke;
    use crate::storage::SqliteStore;

    fn seeded_state() -> Arc<AppState> {
        let store = SqliteStore::open_in_memory().unwrap();
        store.seed_jokes(&joke::default_jokes()).unwrap();
        AppState::new(store, PathBuf::from("site"))
    }

    #[tokio::test]
    async fn test_like_bumps_exactly_one_counter() {
        let state = seeded_state();
        let Json(jokes) = list_jokes(State(state.clone())).await.unwrap();
        let id = jokes[0].id;

        let Json(liked) = like_joke(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(liked.haha, 1);
        assert_eq!(liked.boohoo, 0);

        let err = jeer_joke(State(state), Path(999_999)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
