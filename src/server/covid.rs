//! Covid blueprint: read-only snapshot

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::covid::CovidRecord;
use crate::server::AppState;
use crate::server::error::ApiError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/covid", get(list_records))
}

async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CovidRecord>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.all_covid_records()?))
}
