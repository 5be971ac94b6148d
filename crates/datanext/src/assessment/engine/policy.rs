use std::collections::BTreeMap;

use serde::Serialize;

use super::ClassificationError;
use crate::assessment::criteria::CriterionId;
use crate::assessment::domain::{MigrationPath, ReportStatus, SourceType};

const BUSINESS_VALUE: CriterionId = 2;
const DATA_COMPLEXITY: CriterionId = 3;
const REAL_TIME_REQUIREMENT: CriterionId = 5;
const REUSE_POTENTIAL: CriterionId = 6;
const AI_READINESS: CriterionId = 8;

/// Routing decision for one report. `status` is `Retire` exactly when the
/// path is `Retire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathDecision {
    pub path: MigrationPath,
    pub status: ReportStatus,
}

impl PathDecision {
    const fn retire() -> Self {
        Self {
            path: MigrationPath::Retire,
            status: ReportStatus::Retire,
        }
    }

    const fn retain(path: MigrationPath) -> Self {
        Self {
            path,
            status: ReportStatus::Retain,
        }
    }
}

pub(crate) struct PolicyInput<'a> {
    pub composite_score: f64,
    pub criteria_scores: &'a BTreeMap<CriterionId, u8>,
    pub source_type: SourceType,
    pub catalog_index: usize,
}

/// Signals the rule table consumes, extracted and range-checked up front
/// so every rule sees validated integers.
struct RuleSignals {
    composite_score: f64,
    business_value: u8,
    data_complexity: u8,
    real_time: u8,
    reuse_potential: u8,
    ai_readiness: u8,
    source_type: SourceType,
    catalog_index: usize,
}

struct PathRule {
    name: &'static str,
    applies: fn(&RuleSignals) -> bool,
    resolve: fn(&RuleSignals) -> PathDecision,
}

/// Ordered decision table, first match wins. Rules earlier in the slice
/// shadow later ones even when both predicates hold.
const RULES: &[PathRule] = &[
    PathRule {
        name: "retire_low_value_low_composite",
        applies: |s| s.business_value <= 2 && s.composite_score < 2.0,
        resolve: |_| PathDecision::retire(),
    },
    PathRule {
        name: "retire_modest_value_high_rework",
        applies: |s| s.business_value <= 3 && s.reuse_potential >= 4,
        resolve: |_| PathDecision::retire(),
    },
    PathRule {
        name: "rotate_high_reuse",
        applies: |s| s.reuse_potential <= 2,
        resolve: |s| PathDecision::retain(default_distribution_policy(s.catalog_index)),
    },
    PathRule {
        name: "embed_simple_realtime",
        applies: |s| {
            s.real_time <= 2 && s.data_complexity <= 2 && s.source_type != SourceType::Databricks
        },
        resolve: |_| PathDecision::retain(MigrationPath::S4HanaEmbeddedAnalytics),
    },
    PathRule {
        name: "lakehouse_advanced_analytics",
        applies: |s| s.ai_readiness <= 2 || s.data_complexity >= 4,
        resolve: |_| PathDecision::retain(MigrationPath::Databricks),
    },
];

/// Evaluate the decision table against the report's signals. Falls through
/// to the distribution policy when no rule claims the report.
pub(crate) fn resolve_path(input: &PolicyInput<'_>) -> Result<PathDecision, ClassificationError> {
    let signals = RuleSignals {
        composite_score: input.composite_score,
        business_value: required_score(input.criteria_scores, BUSINESS_VALUE)?,
        data_complexity: required_score(input.criteria_scores, DATA_COMPLEXITY)?,
        real_time: required_score(input.criteria_scores, REAL_TIME_REQUIREMENT)?,
        reuse_potential: required_score(input.criteria_scores, REUSE_POTENTIAL)?,
        ai_readiness: required_score(input.criteria_scores, AI_READINESS)?,
        source_type: input.source_type,
        catalog_index: input.catalog_index,
    };

    for rule in RULES {
        if (rule.applies)(&signals) {
            let decision = (rule.resolve)(&signals);
            tracing::debug!(
                rule = rule.name,
                path = decision.path.label(),
                "decision rule matched"
            );
            return Ok(decision);
        }
    }

    Ok(PathDecision::retain(default_distribution_policy(
        signals.catalog_index,
    )))
}

/// Rotating assignment over the modernization targets. Stands in for a
/// recommendation model; callers that want one replace this function.
pub fn default_distribution_policy(catalog_index: usize) -> MigrationPath {
    let targets = MigrationPath::targets();
    targets[catalog_index % targets.len()]
}

fn required_score(
    scores: &BTreeMap<CriterionId, u8>,
    criterion_id: CriterionId,
) -> Result<u8, ClassificationError> {
    let score = scores.get(&criterion_id).copied().ok_or(
        ClassificationError::MissingRequiredCriterion { criterion_id },
    )?;
    if !(1..=5).contains(&score) {
        return Err(ClassificationError::InvalidScoreRange {
            criterion_id,
            score,
        });
    }
    Ok(score)
}
