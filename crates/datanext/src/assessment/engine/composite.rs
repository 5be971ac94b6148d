use std::collections::BTreeMap;

use super::ClassificationError;
use crate::assessment::criteria::{CriterionDefinition, CriterionId};

/// Weighted composite over the configured criteria.
///
/// Each contribution is `score * weight / 100`. The divisor stays a
/// literal 100 even when the weights no longer sum to it, so tuning a
/// single weight shifts the composite instead of renormalizing the rest.
pub(crate) fn compute_composite_score(
    scores: &BTreeMap<CriterionId, u8>,
    criteria: &[CriterionDefinition],
) -> Result<f64, ClassificationError> {
    let mut composite = 0.0_f64;

    for criterion in criteria {
        let score = scores.get(&criterion.id).copied().ok_or(
            ClassificationError::MissingCriterionScore {
                criterion_id: criterion.id,
            },
        )?;
        if !(1..=5).contains(&score) {
            return Err(ClassificationError::InvalidScoreRange {
                criterion_id: criterion.id,
                score,
            });
        }
        composite += f64::from(score) * f64::from(criterion.weight) / 100.0;
    }

    Ok(composite)
}
