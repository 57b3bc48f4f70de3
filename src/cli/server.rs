//! HTTP server mode for the paging wire contract

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::pagination::{PageProvider, Query as QueryShape, QueryArgs};
use crate::store::EntrySource;

/// App state shared across handlers
struct AppState<S> {
    provider: Arc<PageProvider<S>>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router over a provider
pub fn router<S: EntrySource + 'static>(provider: Arc<PageProvider<S>>) -> Router {
    let state = AppState { provider };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/entries", get(list_entries::<S>))
        .route("/entries/:id", get(get_entry::<S>))
        .fallback(unsupported)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve<S: EntrySource + 'static>(
    provider: Arc<PageProvider<S>>,
    port: u16,
) -> Result<()> {
    let store = provider.source().describe();
    let app = router(provider);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving {} on http://{}", store, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Page query endpoint
async fn list_entries<S: EntrySource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    args: std::result::Result<Query<QueryArgs>, QueryRejection>,
) -> Response {
    let request = match args {
        Ok(Query(args)) => args.into_request(),
        Err(rejection) => {
            return error_response(&Error::invalid_argument(rejection.body_text()));
        }
    };
    let provider = Arc::clone(&state.provider);

    // Listing is blocking I/O
    let result = tokio::task::spawn_blocking(move || provider.query(&request))
        .await
        .map_err(|e| Error::Other(format!("Query task failed: {e}")))
        .and_then(|page| page);

    match result {
        Ok(page) => (StatusCode::OK, Json(ApiResponse::success(page))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Single-entry lookups are not served
///
/// A non-numeric id matches no query shape at all.
async fn get_entry<S: EntrySource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return error_response(&Error::unsupported_query(format!("entries/{id}")));
    };

    match state.provider.resolve(&QueryShape::Item { id }) {
        Ok(page) => (StatusCode::OK, Json(ApiResponse::success(page))).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn unsupported(uri: Uri) -> Response {
    error_response(&Error::unsupported_query(uri.path()))
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        Error::UnsupportedQuery { .. } => StatusCode::NOT_FOUND,
        Error::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        Error::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &Error) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        tracing::warn!("Request failed: {}", err);
    } else {
        tracing::debug!("Request rejected: {}", err);
    }
    (status, Json(ApiResponse::error(err.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DirectoryStore, MemoryStore};
    use crate::types::Entry;
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_with(count: usize) -> Router {
        let entries = (0..count)
            .map(|i| Entry::new(format!("file-{i}"), format!("/data/file-{i}"), 1))
            .collect();
        router(Arc::new(PageProvider::new(MemoryStore::from_entries(entries))))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app_with(0), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_list_entries_page() {
        let (status, body) = get_json(app_with(25), "/entries?offset=20&limit=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total_size"], 25);
        assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["entries"][0]["display_name"], "file-20");
        assert_eq!(body["data"]["honored_arguments"], json!(["OFFSET", "LIMIT"]));
    }

    #[tokio::test]
    async fn test_list_entries_defaults_to_everything() {
        let (status, body) = get_json(app_with(12), "/entries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_negative_offset_is_bad_request() {
        let (status, body) = get_json(app_with(5), "/entries?offset=-1&limit=10").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid argument: offset must not be less than 0"
        );
    }

    #[tokio::test]
    async fn test_item_lookup_is_unsupported() {
        let (status, body) = get_json(app_with(5), "/entries/3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unsupported query: entries/3");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_unsupported() {
        let (status, body) = get_json(app_with(5), "/entries/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Unsupported query: entries/abc");
    }

    #[tokio::test]
    async fn test_malformed_query_string_is_bad_request() {
        let (status, body) = get_json(app_with(5), "/entries?offset=abc&limit=10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid argument: "));
    }

    #[tokio::test]
    async fn test_unknown_path_is_unsupported() {
        let (status, body) = get_json(app_with(5), "/images").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unsupported query: /images");
    }

    #[tokio::test]
    async fn test_missing_store_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("missing"));
        let app = router(Arc::new(PageProvider::new(store)));

        let (status, body) = get_json(app, "/entries?offset=0&limit=10").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
    }
}
