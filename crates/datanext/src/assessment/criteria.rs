use serde::Serialize;

/// Identifier of a decision criterion. Ids 1 through 8 are fixed and stable.
pub type CriterionId = u8;

/// Lower bound a criterion weight can be tuned to.
pub const MIN_WEIGHT: u8 = 5;
/// Upper bound a criterion weight can be tuned to.
pub const MAX_WEIGHT: u8 = 30;

/// One weighted dimension of the decision model, scored 1-5 per report.
///
/// The option list is display metadata only; scoring consumes the weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionDefinition {
    pub id: CriterionId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub weight: u8,
    pub options: &'static [&'static str],
}

/// The fixed registry of the eight decision criteria with their default
/// weights. Defaults sum to 100; runtime adjustments may break that sum and
/// the scorer tolerates it.
pub fn decision_criteria() -> Vec<CriterionDefinition> {
    vec![
        CriterionDefinition {
            id: 1,
            name: "Strategic Objectives",
            short_name: "S/4HANA Alignment",
            description: "Based on the functions e.g. Reimagine Finance",
            weight: 15,
            options: &[
                "Core Finance",
                "Supply Chain",
                "Sales & Distribution",
                "HR",
                "Manufacturing",
                "Procurement",
            ],
        },
        CriterionDefinition {
            id: 2,
            name: "Business Value",
            short_name: "Strategic Importance",
            description: "How critical the reporting is for decision-making, competitive advantage",
            weight: 20,
            options: &["Mission Critical", "High", "Medium", "Low", "Minimal"],
        },
        CriterionDefinition {
            id: 3,
            name: "Data Complexity",
            short_name: "Heterogeneity",
            description: "Mix of SAP sources, non-SAP (e.g., Kinaxis, Salesforce) and transformations",
            weight: 10,
            options: &[
                "SAP Only",
                "SAP + 1 External",
                "Multi-Source",
                "Complex Transformations",
                "Highly Complex",
            ],
        },
        CriterionDefinition {
            id: 4,
            name: "Historical Depth",
            short_name: "Archival/Analytics",
            description: "Historical data requirement for past several years, planning, advanced analytics",
            weight: 10,
            options: &["Current Only", "1 Year", "3 Years", "5+ Years", "Full History"],
        },
        CriterionDefinition {
            id: 5,
            name: "Real-time Requirement",
            short_name: "Operational Need",
            description: "Business need for near-real-time, batch or transactional speed",
            weight: 15,
            options: &[
                "Real-time",
                "Near Real-time",
                "Hourly",
                "Daily Batch",
                "Weekly/Monthly",
            ],
        },
        CriterionDefinition {
            id: 6,
            name: "Legacy Reuse Potential",
            short_name: "Model Reusability",
            description: "Existing BW reports/models can be reused or must be re-designed",
            weight: 10,
            options: &[
                "Direct Reuse",
                "Minor Changes",
                "Moderate Redesign",
                "Major Redesign",
                "Full Rebuild",
            ],
        },
        CriterionDefinition {
            id: 7,
            name: "Effort vs Value",
            short_name: "Cost/Time to Value",
            description: "Effort of migration versus expected value; availability of business/user readiness",
            weight: 10,
            options: &[
                "Quick Win",
                "Low Effort/High Value",
                "Balanced",
                "High Effort/High Value",
                "High Effort/Low Value",
            ],
        },
        CriterionDefinition {
            id: 8,
            name: "Innovation/AI Readiness",
            short_name: "Advanced Analytics",
            description: "Need for advanced analytics, ML, combining with external data (social, IoT)",
            weight: 10,
            options: &[
                "AI/ML Required",
                "Predictive Analytics",
                "Advanced Reporting",
                "Standard Analytics",
                "Basic Reporting",
            ],
        },
    ]
}

/// Sum of the current weights. 100 is the conventional target, not an
/// enforced invariant.
pub fn weight_total(criteria: &[CriterionDefinition]) -> u16 {
    criteria.iter().map(|criterion| u16::from(criterion.weight)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique_and_sequential() {
        let criteria = decision_criteria();
        let ids: Vec<CriterionId> = criteria.iter().map(|criterion| criterion.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn default_weights_sum_to_one_hundred() {
        let criteria = decision_criteria();
        assert_eq!(weight_total(&criteria), 100);
        let weights: Vec<u8> = criteria.iter().map(|criterion| criterion.weight).collect();
        assert_eq!(weights, vec![15, 20, 10, 10, 15, 10, 10, 10]);
    }

    #[test]
    fn every_criterion_carries_display_options() {
        for criterion in decision_criteria() {
            assert!(
                criterion.options.len() >= 5,
                "criterion {} should list its rating options",
                criterion.id
            );
        }
    }
}
