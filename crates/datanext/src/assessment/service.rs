use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogGenerator;
use super::criteria::{weight_total, CriterionDefinition, CriterionId, MAX_WEIGHT, MIN_WEIGHT};
use super::domain::{FunctionalArea, MigrationPath, ReportRecord, ReportStatus, SourceType};
use super::engine::{round_composite, ClassificationEngine, ClassificationError};
use super::export::{render_catalog_csv, ExportError};
use super::repository::{CriteriaRepository, RepositoryError};
use super::stats::{compute_stats, CatalogStats};

/// Page size applied when a catalog query does not set a limit.
pub const DEFAULT_PAGE_SIZE: usize = 60;

/// Service composing the generated catalog, the classification engine,
/// and the tunable criteria registry.
///
/// The catalog is generated once at construction with the weights current
/// at that moment. Later weight changes affect ad-hoc classification only;
/// stored records keep their original composites.
#[derive(Debug)]
pub struct AssessmentService<C> {
    catalog: Vec<ReportRecord>,
    generated_at: DateTime<Utc>,
    criteria: Arc<C>,
}

/// Filters for catalog listing. All fields combine conjunctively.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogQuery {
    pub functional_area: Option<FunctionalArea>,
    pub source_type: Option<SourceType>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// One page of catalog results. `matched` counts all records passing the
/// filters; `reports` holds the requested window of them.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub total: usize,
    pub matched: usize,
    pub offset: usize,
    pub reports: Vec<ReportRecord>,
}

/// Criteria listing plus the weight-balance signal the dashboard surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaView {
    pub criteria: Vec<CriterionDefinition>,
    pub weight_total: u16,
    pub balanced: bool,
}

/// Ad-hoc classification input scored against the current weights.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationRequest {
    pub criteria_scores: BTreeMap<CriterionId, u8>,
    pub source_type: SourceType,
    #[serde(default)]
    pub catalog_index: usize,
}

/// Ad-hoc classification result, composite already rounded for display.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub composite_score: f64,
    pub migration_path: MigrationPath,
    pub status: ReportStatus,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("report {0} not found")]
    ReportNotFound(String),
    #[error("weight {weight} is outside the {MIN_WEIGHT}-{MAX_WEIGHT} range")]
    WeightOutOfRange { weight: u8 },
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl<C> AssessmentService<C>
where
    C: CriteriaRepository + 'static,
{
    /// Generate the catalog with the repository's current weights and
    /// wrap it for serving.
    pub fn new(criteria: Arc<C>, size: usize, seed: u64) -> Result<Self, AssessmentServiceError> {
        let definitions = criteria.list()?;
        let catalog = CatalogGenerator::new(definitions, seed).generate(size)?;
        let generated_at = Utc::now();

        tracing::info!(
            reports = catalog.len(),
            seed,
            "assessment catalog generated"
        );

        Ok(Self {
            catalog,
            generated_at,
            criteria,
        })
    }

    pub fn catalog(&self) -> &[ReportRecord] {
        &self.catalog
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn stats(&self) -> CatalogStats {
        compute_stats(&self.catalog)
    }

    pub fn report(&self, report_id: &str) -> Result<&ReportRecord, AssessmentServiceError> {
        self.catalog
            .iter()
            .find(|record| record.id == report_id)
            .ok_or_else(|| AssessmentServiceError::ReportNotFound(report_id.to_string()))
    }

    /// Filtered, paged view over the catalog. Search matches id and name,
    /// case-insensitively.
    pub fn list_reports(&self, query: &CatalogQuery) -> CatalogPage {
        let needle = query
            .search
            .as_deref()
            .map(str::to_ascii_lowercase)
            .filter(|term| !term.is_empty());

        let matching: Vec<&ReportRecord> = self
            .catalog
            .iter()
            .filter(|record| {
                query
                    .functional_area
                    .map_or(true, |area| record.functional_area == area)
            })
            .filter(|record| {
                query
                    .source_type
                    .map_or(true, |source| record.source_type == source)
            })
            .filter(|record| match &needle {
                Some(term) => {
                    record.id.to_ascii_lowercase().contains(term)
                        || record.name.to_ascii_lowercase().contains(term)
                }
                None => true,
            })
            .collect();

        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let reports = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|record| (*record).clone())
            .collect();

        CatalogPage {
            total: self.catalog.len(),
            matched: matching.len(),
            offset,
            reports,
        }
    }

    pub fn criteria_view(&self) -> Result<CriteriaView, AssessmentServiceError> {
        let criteria = self.criteria.list()?;
        let weight_total = weight_total(&criteria);
        Ok(CriteriaView {
            balanced: weight_total == 100,
            weight_total,
            criteria,
        })
    }

    /// Tune a criterion weight. Bounds are checked here so every
    /// repository implementation sees only valid weights.
    pub fn set_weight(
        &self,
        criterion_id: CriterionId,
        weight: u8,
    ) -> Result<CriterionDefinition, AssessmentServiceError> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(AssessmentServiceError::WeightOutOfRange { weight });
        }

        let updated = self.criteria.set_weight(criterion_id, weight)?;
        tracing::info!(
            criterion = updated.id,
            weight = updated.weight,
            "criterion weight updated"
        );
        Ok(updated)
    }

    /// Score an ad-hoc request against the weights as they stand now.
    pub fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationView, AssessmentServiceError> {
        let definitions = self.criteria.list()?;
        let engine = ClassificationEngine::new(definitions);
        let outcome = engine.classify(
            &request.criteria_scores,
            request.source_type,
            request.catalog_index,
        )?;

        Ok(ClassificationView {
            composite_score: round_composite(outcome.composite_score),
            migration_path: outcome.migration_path,
            status: outcome.status,
        })
    }

    pub fn export_csv(&self) -> Result<String, AssessmentServiceError> {
        Ok(render_catalog_csv(&self.catalog)?)
    }
}
