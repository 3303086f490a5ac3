//! # API REST
//!
//! REST API implementation for VPR Links.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `vpr-links` for the catalog and renderer.

#![warn(rust_2018_idioms)]

pub mod config;

use api_shared::{
    ErrorRes, HealthRes, HealthService, LinkDto, LinkSetRes, ListLinkSetsRes, RenderReq,
    RenderRes, RenderedLinkDto,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;
use vpr_links::{render_links, LinkCatalog, LinkSet};

pub use config::RestConfig;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Application state shared across REST API handlers
///
/// Holds the process-wide link catalog. The catalog is read-only, so the state is freely
/// cloned into each request.
#[derive(Clone)]
pub struct AppState {
    catalog: &'static LinkCatalog,
}

impl AppState {
    pub fn new(catalog: &'static LinkCatalog) -> Self {
        Self { catalog }
    }

    fn link_set(&self, name: &str) -> Result<&'static LinkSet, ApiError> {
        self.catalog.find(name).ok_or_else(|| {
            tracing::debug!("unknown link set requested: {}", name);
            error(StatusCode::NOT_FOUND, format!("unknown link set: {name}"))
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(vpr_links::catalog())
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_link_sets, get_link_set, render_link_set, render),
    components(schemas(
        HealthRes,
        ErrorRes,
        LinkDto,
        LinkSetRes,
        ListLinkSetsRes,
        RenderReq,
        RenderRes,
        RenderedLinkDto,
    ))
)]
pub struct ApiDoc;

/// Query parameters for rendering a catalog link set.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RenderQuery {
    /// Extra class appended to the list's base class.
    pub class_name: Option<String>,
}

/// Builds the REST router, including Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/link-sets", get(list_link_sets))
        .route("/link-sets/:name", get(get_link_set))
        .route("/link-sets/:name/render", get(render_link_set))
        .route("/render", post(render))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `cfg.addr()` and serves the REST API until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(cfg: RestConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("-- VPR Links REST API listening on {}", cfg.addr());
    axum::serve(listener, router(AppState::default())).await?;
    Ok(())
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorRes {
            error: message.into(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/link-sets",
    responses(
        (status = 200, description = "Names of all catalog link sets, in catalog order", body = ListLinkSetsRes)
    )
)]
/// List the names of the predefined link sets
#[axum::debug_handler]
async fn list_link_sets(State(state): State<AppState>) -> Json<ListLinkSetsRes> {
    Json(ListLinkSetsRes {
        names: state.catalog.names().map(str::to_owned).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/link-sets/{name}",
    params(("name" = String, Path, description = "Link set name, e.g. patient-care")),
    responses(
        (status = 200, description = "Link set descriptors", body = LinkSetRes),
        (status = 404, description = "Unknown link set", body = ErrorRes)
    )
)]
/// Fetch the descriptors of one link set
///
/// # Errors
/// Returns `404 Not Found` if `name` is not a catalog link set.
#[axum::debug_handler]
async fn get_link_set(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LinkSetRes>, ApiError> {
    let set = state.link_set(&name)?;
    Ok(Json(LinkSetRes::from(set)))
}

#[utoipa::path(
    get,
    path = "/link-sets/{name}/render",
    params(
        ("name" = String, Path, description = "Link set name, e.g. patient-care"),
        RenderQuery
    ),
    responses(
        (status = 200, description = "Rendered link list", body = RenderRes),
        (status = 404, description = "Unknown link set", body = ErrorRes)
    )
)]
/// Render one link set
///
/// # Errors
/// Returns `404 Not Found` if `name` is not a catalog link set.
#[axum::debug_handler]
async fn render_link_set(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderRes>, ApiError> {
    let set = state.link_set(&name)?;
    let list = render_links(set.links(), query.class_name.as_deref().unwrap_or_default());
    Ok(Json(RenderRes::from(&list)))
}

#[utoipa::path(
    post,
    path = "/render",
    request_body = RenderReq,
    responses(
        (status = 200, description = "Rendered link list", body = RenderRes),
        (status = 422, description = "A link descriptor failed validation", body = ErrorRes)
    )
)]
/// Render an ad-hoc sequence of links
///
/// # Errors
/// Returns `422 Unprocessable Entity` if any descriptor has blank text or an href that does
/// not match its link type.
#[axum::debug_handler]
async fn render(
    State(_state): State<AppState>,
    Json(req): Json<RenderReq>,
) -> Result<Json<RenderRes>, ApiError> {
    let class_name = req.class_name.clone().unwrap_or_default();
    let links = req.into_descriptors().map_err(|e| {
        tracing::warn!("rejected render request: {}", e);
        error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;
    let list = render_links(&links, &class_name);
    Ok(Json(RenderRes::from(&list)))
}
