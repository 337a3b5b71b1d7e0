//! User blueprint: list and create

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::server::AppState;
use crate::server::error::ApiError;
use crate::user::{NewUser, User};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.all_users()?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    // a duplicate uid violates the unique constraint and surfaces as a 500
    let id = store.insert_user(&payload)?;
    Ok(Json(json!({ "id": id })))
}
