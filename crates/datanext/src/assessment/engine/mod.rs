pub(crate) mod composite;
pub(crate) mod policy;

pub use policy::{default_distribution_policy, PathDecision};

use serde::Serialize;
use thiserror::Error;

use super::criteria::CriterionDefinition;
use super::domain::{MigrationPath, ReportStatus, SourceType};
use crate::assessment::criteria::CriterionId;
use policy::PolicyInput;
use std::collections::BTreeMap;

/// Failures raised while scoring or routing a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("no score supplied for criterion {criterion_id}")]
    MissingCriterionScore { criterion_id: CriterionId },
    #[error("criterion {criterion_id} is required by the decision rules but was not scored")]
    MissingRequiredCriterion { criterion_id: CriterionId },
    #[error("score {score} for criterion {criterion_id} is outside the 1-5 scale")]
    InvalidScoreRange { criterion_id: CriterionId, score: u8 },
}

/// Stateless classifier that applies the weighted criteria and the
/// migration decision rules to a set of ratings.
pub struct ClassificationEngine {
    criteria: Vec<CriterionDefinition>,
}

impl ClassificationEngine {
    pub fn new(criteria: Vec<CriterionDefinition>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[CriterionDefinition] {
        &self.criteria
    }

    /// Score the ratings and resolve a migration path. `catalog_index`
    /// feeds the distribution policy used when no rule claims the report.
    pub fn classify(
        &self,
        scores: &BTreeMap<CriterionId, u8>,
        source_type: SourceType,
        catalog_index: usize,
    ) -> Result<ClassificationOutcome, ClassificationError> {
        let composite_score = composite::compute_composite_score(scores, &self.criteria)?;

        let decision = policy::resolve_path(&PolicyInput {
            composite_score,
            criteria_scores: scores,
            source_type,
            catalog_index,
        })?;

        Ok(ClassificationOutcome {
            composite_score,
            migration_path: decision.path,
            status: decision.status,
        })
    }
}

/// Classification output pairing the raw composite with the routing
/// decision. The composite is unrounded; callers round at persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationOutcome {
    pub composite_score: f64,
    pub migration_path: MigrationPath,
    pub status: ReportStatus,
}

/// Round a composite to two decimals for persistence and display.
pub fn round_composite(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
