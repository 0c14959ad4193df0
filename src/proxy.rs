//! Recipe search proxy endpoint.
//!
//! Exposes `GET /api/search?endpoint=<op>&query=<q>&ingredients=<i>`, which
//! translates one of three logical operations into the matching Spoonacular
//! URL, injects the server-held API key, performs the upstream call, and
//! relays the JSON body.
//!
//! # Endpoints
//!
//! | `endpoint` value    | Upstream call |
//! |---------------------|---------------|
//! | `complexSearch`     | `/recipes/complexSearch` name search, 12 results, recipe info and ingredients included |
//! | `findByIngredients` | `/recipes/findByIngredients` ingredient search, 12 results, ranking 1 |
//! | `information`       | `/recipes/{id}/information`, nutrition excluded |
//!
//! Any other `endpoint` value is rejected with HTTP 400 before any upstream
//! call. Upstream transport or JSON-parse failures become HTTP 500 with a
//! fixed plain-text body, so neither the key nor raw upstream error detail
//! is ever visible to the client.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

/// Server-held configuration for upstream calls.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Spoonacular API key, injected into every upstream URL.
    api_key: String,
    /// Upstream base URL, without a trailing slash.
    upstream_base: String,
}

impl ProxyConfig {
    pub fn new(api_key: String, upstream_base: String) -> Self {
        Self {
            api_key,
            upstream_base: upstream_base.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the upstream URL for a logical endpoint, or `None` for an
    /// unrecognized one. Parameter values are URL-encoded.
    pub fn upstream_url(&self, endpoint: &str, query: &str, ingredients: &str) -> Option<String> {
        match endpoint {
            "complexSearch" => Some(format!(
                "{}/recipes/complexSearch?query={}&apiKey={}&number=12&addRecipeInformation=true&fillIngredients=true",
                self.upstream_base,
                urlencoding::encode(query),
                self.api_key
            )),
            "findByIngredients" => Some(format!(
                "{}/recipes/findByIngredients?ingredients={}&apiKey={}&number=12&ranking=1",
                self.upstream_base,
                urlencoding::encode(ingredients),
                self.api_key
            )),
            "information" => Some(format!(
                "{}/recipes/{}/information?apiKey={}&includeNutrition=false",
                self.upstream_base,
                urlencoding::encode(query),
                self.api_key
            )),
            _ => None,
        }
    }
}

/// Shared state passed to the handler via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    config: Arc<ProxyConfig>,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    endpoint: String,
    #[serde(default)]
    query: String,
    #[serde(default)]
    ingredients: String,
}

/// Builds the proxy router. The router is stateless from the client's
/// perspective; repeating any call is safe.
pub fn router(config: ProxyConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        config: Arc::new(config),
        http: reqwest::Client::new(),
    };

    Router::new()
        .route("/api/search", get(handle_search))
        .layer(cors)
        .with_state(state)
}

async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let url = match state
        .config
        .upstream_url(&params.endpoint, &params.query, &params.ingredients)
    {
        Some(url) => url,
        None => {
            tracing::warn!("rejected request for unknown endpoint: {:?}", params.endpoint);
            return (StatusCode::BAD_REQUEST, "Invalid API endpoint requested.").into_response();
        }
    };

    match relay(&state.http, &url).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("upstream request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "API proxy error.").into_response()
        }
    }
}

/// Performs the upstream call and returns the JSON body verbatim. The body
/// is parsed only to confirm it is JSON; the relayed bytes are untouched.
///
/// Errors are stripped of their URL before logging, since the upstream URL
/// carries the API key.
async fn relay(http: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("failed to reach upstream: {}", e.without_url()))?;

    let body = response
        .text()
        .await
        .map_err(|e| anyhow::anyhow!("failed to read upstream body: {}", e.without_url()))?;

    let _: serde_json::Value = serde_json::from_str(&body)
        .map_err(|e| anyhow::anyhow!("upstream response was not JSON: {}", e))?;

    Ok(body)
}
