//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use spellbook_domain::{DomainError, Spell};
use spellbook_shared::{
    CatalogStatusResponse, ClassListResponse, ClassSummary, ErrorCode, ErrorResponse,
    FacetsResponse, SpellListResponse, SpellQuery, StatsResponse,
};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::catalog::CatalogError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/catalog/status", get(catalog_status))
        .route("/api/spells", get(list_spells))
        .route("/api/spells/{id}", get(get_spell))
        .route("/api/facets", get(get_facets))
        .route("/api/classes", get(list_classes))
        .route("/api/stats", get(get_stats))
}

async fn health() -> &'static str {
    "OK"
}

async fn catalog_status(State(app): State<Arc<App>>) -> Json<CatalogStatusResponse> {
    Json(CatalogStatusResponse {
        source: app.catalog.source().to_string(),
        state: app.catalog.status().await,
    })
}

async fn list_spells(
    State(app): State<Arc<App>>,
    Query(query): Query<SpellQuery>,
) -> Result<Json<SpellListResponse>, ApiError> {
    let filters = query.to_filter_state()?;
    let (spells, total) = app.catalog.query(&filters).await?;
    Ok(Json(SpellListResponse::new(spells, total, filters)))
}

async fn get_spell(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Spell>, ApiError> {
    let spell = app.catalog.spell(&id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(spell))
}

async fn get_facets(State(app): State<Arc<App>>) -> Result<Json<FacetsResponse>, ApiError> {
    Ok(Json(app.catalog.facets().await?))
}

async fn list_classes(State(app): State<Arc<App>>) -> Result<Json<ClassListResponse>, ApiError> {
    let classes = app
        .catalog
        .classes()
        .await?
        .into_iter()
        .map(|(class, spell_count)| ClassSummary { class, spell_count })
        .collect();
    Ok(Json(ClassListResponse { classes }))
}

async fn get_stats(
    State(app): State<Arc<App>>,
    Query(query): Query<SpellQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let filters = query.to_filter_state()?;
    let stats = app.catalog.stats(&filters).await?;
    Ok(Json(StatsResponse::from(stats)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    /// The catalog could not be built
    Unavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::NotFound, "Not found"),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::BadRequest, msg),
            ),
            ApiError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(ErrorCode::ServiceUnavailable, msg),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Unavailable(e.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
