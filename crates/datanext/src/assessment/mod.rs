//! Migration assessment for legacy enterprise reports.
//!
//! The weighted criteria registry feeds the composite scorer, the scorer
//! and raw ratings feed the path resolver, and the decorated catalog
//! feeds the aggregate statistics. Everything downstream of the catalog
//! is a pure read.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod engine;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use catalog::{
    data_source_pool, generate_report_catalog, CatalogGenerator, DeterministicRng,
    DEFAULT_CATALOG_SEED, DEFAULT_CATALOG_SIZE,
};
pub use criteria::{
    decision_criteria, weight_total, CriterionDefinition, CriterionId, MAX_WEIGHT, MIN_WEIGHT,
};
pub use domain::{
    FunctionalArea, MigrationPath, RefreshFrequency, ReportCategory, ReportRecord, ReportStatus,
    SourceType,
};
pub use engine::{
    default_distribution_policy, round_composite, ClassificationEngine, ClassificationError,
    ClassificationOutcome, PathDecision,
};
pub use export::{render_catalog_csv, write_catalog_csv, ExportError};
pub use repository::{CriteriaRepository, RepositoryError};
pub use router::{assessment_router, WeightUpdateRequest};
pub use service::{
    AssessmentService, AssessmentServiceError, CatalogPage, CatalogQuery, ClassificationRequest,
    ClassificationView, CriteriaView, DEFAULT_PAGE_SIZE,
};
pub use stats::{compute_stats, CatalogStats, PathBreakdown, SourceBreakdown};
