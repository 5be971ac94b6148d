use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::criteria::CriterionId;
use super::repository::{CriteriaRepository, RepositoryError};
use super::service::{
    AssessmentService, AssessmentServiceError, CatalogQuery, ClassificationRequest,
};

/// Router builder exposing HTTP endpoints for the assessment catalog and
/// the tunable decision model.
pub fn assessment_router<C>(service: Arc<AssessmentService<C>>) -> Router
where
    C: CriteriaRepository + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<C>))
        .route("/api/v1/catalog/stats", get(stats_handler::<C>))
        .route("/api/v1/catalog/export", get(export_handler::<C>))
        .route("/api/v1/catalog/:report_id", get(report_handler::<C>))
        .route("/api/v1/criteria", get(criteria_handler::<C>))
        .route(
            "/api/v1/criteria/:criterion_id/weight",
            put(weight_handler::<C>),
        )
        .route("/api/v1/classify", post(classify_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct WeightUpdateRequest {
    pub weight: u8,
}

pub(crate) async fn catalog_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    Query(query): Query<CatalogQuery>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    let page = service.list_reports(&query);
    (StatusCode::OK, axum::Json(page)).into_response()
}

pub(crate) async fn stats_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.stats())).into_response()
}

pub(crate) async fn report_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    Path(report_id): Path<String>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    match service.report(&report_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn criteria_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    match service.criteria_view() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn weight_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    Path(criterion_id): Path<CriterionId>,
    axum::Json(request): axum::Json<WeightUpdateRequest>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    match service.set_weight(criterion_id, request.weight) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn classify_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    axum::Json(request): axum::Json<ClassificationRequest>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    match service.classify(&request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
) -> Response
where
    C: CriteriaRepository + 'static,
{
    match service.export_csv() {
        Ok(rendered) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            rendered,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::ReportNotFound(_)
        | AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::WeightOutOfRange { .. }
        | AssessmentServiceError::Repository(RepositoryError::InvalidWeight(_))
        | AssessmentServiceError::Classification(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
