//! Player blueprint: list and create

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::player::{NewPlayer, Player};
use crate::server::AppState;
use crate::server::error::ApiError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/players", get(list_players).post(create_player))
}

async fn list_players(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Player>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.all_players()?))
}

async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPlayer>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    let id = store.insert_player(&payload)?;
    Ok(Json(json!({ "id": id })))
}
