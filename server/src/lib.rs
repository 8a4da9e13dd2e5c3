use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wordrank_core::{SearchEngine, SearchResult};

pub const DEFAULT_MAX_QUERY_TERMS: usize = 256;
const MISSING_QUERY: &str = "No search query provided";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub corpus_dirs: Vec<PathBuf>,
    pub max_query_terms: usize,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub max_query_terms: usize,
}

/// Errors surfaced by the HTTP layer. The core itself never fails at query time.
#[derive(Debug)]
pub enum ApiError {
    MissingQuery,
    QueryTooLong { terms: usize, max: usize },
    BadRequest(String),
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Kept as a bare JSON string for existing clients.
        if let ApiError::MissingQuery = self {
            return (StatusCode::BAD_REQUEST, Json(MISSING_QUERY)).into_response();
        }
        let (status, message) = match self {
            ApiError::MissingQuery => unreachable!(),
            ApiError::QueryTooLong { terms, max } => {
                (StatusCode::BAD_REQUEST, format!("query has {terms} terms, limit is {max}"))
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };
        let body = serde_json::json!({ "status": status.as_u16(), "message": message });
        (status, Json(body)).into_response()
    }
}

/// Load the corpus and build the router. Fails before anything is served
/// if any corpus source cannot be read.
pub fn build_app(config: &ServerConfig) -> Result<Router> {
    let engine = SearchEngine::load(&config.corpus_dirs)?;
    let state = AppState { engine: Arc::new(engine), max_query_terms: config.max_query_terms };
    Ok(router(state))
}

/// Browser origins allowed to call the API: the comma-separated
/// `CORS_ALLOW_ORIGIN` list, or any origin when it is unset or unparsable.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    let allow_origin = if origins.is_empty() { AllowOrigin::any() } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Json("WELCOME TO THE API") }))
        .route("/health", get(|| async { "ok" }))
        .route("/search", post(search_handler))
        .fallback(|| async { ApiError::NotFound })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

pub async fn search_handler(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = match req.query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::MissingQuery),
    };
    let terms = query.split_whitespace().count();
    if terms > state.max_query_terms {
        return Err(ApiError::QueryTooLong { terms, max: state.max_query_terms });
    }

    let start = std::time::Instant::now();
    let results = state.engine.query(&query);
    tracing::info!(terms, hits = results.len(), took_s = start.elapsed().as_secs_f64(), "search");
    Ok(Json(results))
}
