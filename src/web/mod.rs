//! Web front-end: JSON endpoints mirroring the bridge operations plus
//! minimal HTML pages. Like the other front-ends, this layer only
//! translates its protocol to and from the four bridge calls.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use minijinja::{Environment, context};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::bridge::{Bridge, DEFAULT_MAX_RESULTS};
use crate::config::Config;
use crate::error::GeneMcpError;

type AppState = Arc<Bridge>;

/// Binds `host:port` and serves the router until the process exits.
///
/// # Errors
///
/// Returns an error when address parsing or the TCP bind fails, or when
/// the server loop errors out.
pub async fn serve(config: Config, host: &str, port: u16) -> anyhow::Result<()> {
    let bridge = Bridge::new(config)?;

    let ip: IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host address: {e}"))?;
    let addr = SocketAddr::new(ip, port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("web front-end listening on http://{addr}");
    axum::serve(listener, router(bridge)).await?;
    Ok(())
}

pub fn router(bridge: Bridge) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/search", get(search_page))
        .route("/about", get(about_page))
        .route("/api", get(api_page))
        .route("/gene/:gene_id", get(gene_page))
        .route("/api/health", get(health))
        .route("/api/examples", get(examples))
        .route("/api/search/genes", get(search_genes))
        .route("/api/search/symbol", get(search_symbol))
        .route("/api/gene/:gene_id", get(gene_info))
        .route("/api/protein/:protein_id", get(protein_info))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(bridge))
}

/// Bridge error wrapper carrying the front-end status mapping.
struct ApiError(GeneMcpError);

impl From<GeneMcpError> for ApiError {
    fn from(err: GeneMcpError) -> Self {
        Self(err)
    }
}

fn status_for(err: &GeneMcpError) -> StatusCode {
    match err {
        GeneMcpError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        GeneMcpError::NotFound { .. } => StatusCode::NOT_FOUND,
        GeneMcpError::Timeout { .. }
        | GeneMcpError::Api { .. }
        | GeneMcpError::Protocol { .. }
        | GeneMcpError::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

fn render_template(
    name: &'static str,
    source: &'static str,
    ctx: minijinja::Value,
) -> Result<String, GeneMcpError> {
    let mut env = Environment::new();
    env.add_template(name, source)?;
    Ok(env.get_template(name)?.render(ctx)?)
}

async fn home_page() -> Result<Html<String>, ApiError> {
    let html = render_template(
        "index.html",
        include_str!("templates/index.html"),
        context! {},
    )?;
    Ok(Html(html))
}

async fn about_page() -> Result<Html<String>, ApiError> {
    let html = render_template(
        "about.html",
        include_str!("templates/about.html"),
        context! {},
    )?;
    Ok(Html(html))
}

async fn api_page() -> Result<Html<String>, ApiError> {
    let html = render_template("api.html", include_str!("templates/api.html"), context! {})?;
    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
struct SearchPageParams {
    query: Option<String>,
}

/// Server-rendered search results page. Without a query it shows the
/// bare form; with one it runs the same search as the JSON endpoint.
async fn search_page(
    State(bridge): State<AppState>,
    Query(params): Query<SearchPageParams>,
) -> Response {
    let query = params
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    let Some(query) = query else {
        let ctx = context! { query => "", result => minijinja::Value::from(()) };
        return match render_template("search.html", include_str!("templates/search.html"), ctx) {
            Ok(html) => Html(html).into_response(),
            Err(err) => ApiError(err).into_response(),
        };
    };

    match bridge.search_genes(&query, DEFAULT_MAX_RESULTS).await {
        Ok(result) => {
            let ctx = context! {
                query => query,
                result => minijinja::Value::from_serialize(&result),
            };
            match render_template("search.html", include_str!("templates/search.html"), ctx) {
                Ok(html) => Html(html).into_response(),
                Err(err) => ApiError(err).into_response(),
            }
        }
        Err(err) => {
            let status = status_for(&err);
            let ctx = context! { message => err.to_string() };
            match render_template("error.html", include_str!("templates/error.html"), ctx) {
                Ok(html) => (status, Html(html)).into_response(),
                Err(err) => ApiError(err).into_response(),
            }
        }
    }
}

async fn gene_page(State(bridge): State<AppState>, Path(gene_id): Path<String>) -> Response {
    match bridge.fetch_gene_info(&gene_id).await {
        Ok(gene) => {
            let gene_json = serde_json::to_string_pretty(&gene).unwrap_or_default();
            let ctx = context! {
                gene => minijinja::Value::from_serialize(&gene),
                gene_json => gene_json,
            };
            match render_template("gene.html", include_str!("templates/gene.html"), ctx) {
                Ok(html) => Html(html).into_response(),
                Err(err) => ApiError(err).into_response(),
            }
        }
        Err(err) => {
            let status = status_for(&err);
            let ctx = context! { message => err.to_string() };
            match render_template("error.html", include_str!("templates/error.html"), ctx) {
                Ok(html) => (status, Html(html)).into_response(),
                Err(err) => ApiError(err).into_response(),
            }
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "genemcp" }))
}

/// Canned example queries and ids for the search page.
async fn examples() -> Json<serde_json::Value> {
    Json(json!({
        "search_examples": [
            "BRCA1[gene] AND human[organism]",
            "breast cancer[disease] AND human[organism]",
            "TP53",
            "APOE[gene]"
        ],
        "gene_examples": [
            { "id": "672", "name": "BRCA1", "description": "Breast cancer gene" },
            { "id": "7157", "name": "TP53", "description": "Tumor suppressor" },
            { "id": "348", "name": "APOE", "description": "Alzheimer's risk factor" },
            { "id": "1956", "name": "EGFR", "description": "Epidermal growth factor receptor" }
        ],
        "organisms": ["human", "Homo sapiens", "mouse", "Mus musculus"]
    }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
    max_results: Option<usize>,
}

async fn search_genes(
    State(bridge): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let result = bridge
        .search_genes(
            &params.query,
            params.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        )
        .await?;
    Ok(Json(result).into_response())
}

#[derive(Debug, Deserialize)]
struct SymbolParams {
    #[serde(default)]
    symbol: String,
    organism: Option<String>,
}

async fn search_symbol(
    State(bridge): State<AppState>,
    Query(params): Query<SymbolParams>,
) -> Result<Response, ApiError> {
    let matches = bridge
        .search_by_gene_symbol(&params.symbol, params.organism.as_deref())
        .await?;
    Ok(Json(matches).into_response())
}

async fn gene_info(
    State(bridge): State<AppState>,
    Path(gene_id): Path<String>,
) -> Result<Response, ApiError> {
    let gene = bridge.fetch_gene_info(&gene_id).await?;
    Ok(Json(gene).into_response())
}

async fn protein_info(
    State(bridge): State<AppState>,
    Path(protein_id): Path<String>,
) -> Result<Response, ApiError> {
    let protein = bridge.fetch_protein_info(&protein_id).await?;
    Ok(Json(protein).into_response())
}
