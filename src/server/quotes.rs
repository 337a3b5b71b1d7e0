//! The quote repository resource
//!
//! One path, three explicit method bindings (GET list, POST create, OPTIONS
//! preflight); anything else gets the framework's 405. Every response leaving
//! this router carries the fixed origin policy headers, success or error.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::quote::SubmitQuote;
use crate::server::AppState;
use crate::server::error::ApiError;

/// The single origin allowed to call this resource from a browser
const ALLOWED_ORIGIN: &str = "https://isabellehp.github.io";
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/quote-repository",
            get(list_quotes).post(create_quote).options(preflight),
        )
        .layer(middleware::from_fn(origin_policy))
}

/// Set the fixed origin policy headers on a response, replacing any present
pub fn apply_origin_policy(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}

/// Middleware decorating every response from this router, errors included
async fn origin_policy(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_origin_policy(&mut response);
    response
}

/// GET: every stored quote, in storage order, identifiers not exposed
async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    let quotes = store.all_quotes()?;
    Ok(Json(json!({ "quotes": quotes })))
}

/// POST: validate the submission, then persist one quote
async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitQuote>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let new_quote = payload.validate()?;

    let store = state.store.lock().await;
    store.insert_quote(&new_quote)?;
    tracing::debug!("stored quote by {}", new_quote.quote_author);

    Ok(Json(json!({ "message": "Quote submitted successfully" })))
}

/// OPTIONS: empty success, headers come from the middleware
async fn preflight() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::response::IntoResponse;

    use super::*;
    use crate::storage::SqliteStore;

    fn test_state() -> Arc<AppState> {
        AppState::new(SqliteStore::open_in_memory().unwrap(), PathBuf::from("site"))
    }

    fn submission(quote: Option<&str>, author: Option<&str>, opinion: Option<&str>) -> SubmitQuote {
        SubmitQuote {
            quote: quote.map(String::from),
            quote_author: author.map(String::from),
            opinion: opinion.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let state = test_state();

        let Json(created) = create_quote(
            State(state.clone()),
            Json(submission(Some("Be water."), Some("Bruce Lee"), Some("Inspiring"))),
        )
        .await
        .unwrap();
        assert_eq!(created["message"], "Quote submitted successfully");

        let Json(body) = list_quotes(State(state)).await.unwrap();
        let quotes = body["quotes"].as_array().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0]["quote_text"], "Be water.");
        assert_eq!(quotes[0]["quote_author"], "Bruce Lee");
        assert_eq!(quotes[0]["user_opinion"], "Inspiring");
        assert!(quotes[0].get("id").is_none());
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_before_persistence() {
        let state = test_state();

        let err = create_quote(
            State(state.clone()),
            Json(submission(Some("x"), None, None)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingField("quote_author")));

        // nothing was silently defaulted and stored
        assert_eq!(state.store.lock().await.count_quotes().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_preflight_has_no_side_effect() {
        let state = test_state();

        for _ in 0..3 {
            assert_eq!(preflight().await, StatusCode::OK);
        }

        assert_eq!(state.store.lock().await.count_quotes().unwrap(), 0);
    }

    #[test]
    fn test_origin_policy_headers_exact() {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        apply_origin_policy(&mut response);

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://isabellehp.github.io"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[test]
    fn test_origin_policy_replaces_existing_values() {
        let mut response = StatusCode::OK.into_response();
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

        apply_origin_policy(&mut response);

        let values: Vec<_> = response
            .headers()
            .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(values, vec!["https://isabellehp.github.io"]);
    }
}
