use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessment::criteria::{decision_criteria, CriterionDefinition, CriterionId};
use crate::assessment::domain::{
    FunctionalArea, MigrationPath, RefreshFrequency, ReportCategory, ReportRecord, ReportStatus,
    SourceType,
};
use crate::assessment::repository::{CriteriaRepository, RepositoryError};
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

/// Score map over ids 1-8 from a fixed-order array.
pub(super) fn scores(values: [u8; 8]) -> BTreeMap<CriterionId, u8> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, score)| (index as CriterionId + 1, score))
        .collect()
}

pub(super) fn uniform_scores(value: u8) -> BTreeMap<CriterionId, u8> {
    scores([value; 8])
}

/// In-memory criteria registry backing service and router tests.
#[derive(Debug)]
pub(super) struct MemoryCriteriaRegistry {
    criteria: Mutex<Vec<CriterionDefinition>>,
}

impl Default for MemoryCriteriaRegistry {
    fn default() -> Self {
        Self {
            criteria: Mutex::new(decision_criteria()),
        }
    }
}

impl CriteriaRepository for MemoryCriteriaRegistry {
    fn list(&self) -> Result<Vec<CriterionDefinition>, RepositoryError> {
        Ok(self.criteria.lock().expect("registry mutex poisoned").clone())
    }

    fn fetch(&self, id: CriterionId) -> Result<Option<CriterionDefinition>, RepositoryError> {
        Ok(self
            .criteria
            .lock()
            .expect("registry mutex poisoned")
            .iter()
            .find(|criterion| criterion.id == id)
            .cloned())
    }

    fn set_weight(
        &self,
        id: CriterionId,
        weight: u8,
    ) -> Result<CriterionDefinition, RepositoryError> {
        let mut criteria = self.criteria.lock().expect("registry mutex poisoned");
        let criterion = criteria
            .iter_mut()
            .find(|criterion| criterion.id == id)
            .ok_or(RepositoryError::NotFound)?;
        criterion.weight = weight;
        Ok(criterion.clone())
    }
}

/// Registry whose every operation fails, for error-path coverage.
#[derive(Debug)]
pub(super) struct UnavailableRegistry;

impl CriteriaRepository for UnavailableRegistry {
    fn list(&self) -> Result<Vec<CriterionDefinition>, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }

    fn fetch(&self, _id: CriterionId) -> Result<Option<CriterionDefinition>, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }

    fn set_weight(
        &self,
        _id: CriterionId,
        _weight: u8,
    ) -> Result<CriterionDefinition, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }
}

pub(super) fn build_service(
    size: usize,
) -> (
    Arc<AssessmentService<MemoryCriteriaRegistry>>,
    Arc<MemoryCriteriaRegistry>,
) {
    let registry = Arc::new(MemoryCriteriaRegistry::default());
    let service = AssessmentService::new(registry.clone(), size, 17).expect("service builds");
    (Arc::new(service), registry)
}

pub(super) fn build_router(size: usize) -> Router {
    let (service, _) = build_service(size);
    assessment_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Minimal catalog record for aggregation tests.
pub(super) fn record(
    id: &str,
    source_type: SourceType,
    migration_path: MigrationPath,
    status: ReportStatus,
) -> ReportRecord {
    ReportRecord {
        id: id.to_string(),
        name: format!("{id} report"),
        source_type,
        functional_area: FunctionalArea::Finance,
        category: ReportCategory::ManagementReport,
        data_sources: vec!["ACDOCA".to_string()],
        business_owner: "CFO Office".to_string(),
        refresh_frequency: RefreshFrequency::Daily,
        last_used_days: 10,
        active_users: 5,
        created_year: 2019,
        criteria_scores: uniform_scores(3),
        composite_score: 3.0,
        migration_path,
        status,
        confidence: 90,
        rationale: "Based on Effort vs Value assessment".to_string(),
    }
}
