use std::collections::BTreeMap;

use super::criteria::{decision_criteria, CriterionDefinition};
use super::domain::{
    FunctionalArea, RefreshFrequency, ReportCategory, ReportRecord, SourceType,
};
use super::engine::{round_composite, ClassificationEngine, ClassificationError};

/// Catalog size used when the environment does not override it.
pub const DEFAULT_CATALOG_SIZE: usize = 250;

/// Seed used when the environment does not override it.
pub const DEFAULT_CATALOG_SEED: u64 = 0x00DA_7A0E;

const REPORT_NAMES: [&str; 24] = [
    "Revenue Analysis",
    "Cost Center Report",
    "Inventory Status",
    "Sales Pipeline",
    "Budget Variance",
    "Headcount Report",
    "Procurement Spend",
    "Customer Insights",
    "Product Profitability",
    "Cash Flow Analysis",
    "Order Fulfillment",
    "Vendor Performance",
    "Employee Turnover",
    "Campaign ROI",
    "Logistics Tracking",
    "Quality Metrics",
    "Margin Analysis",
    "Working Capital",
    "DSO Tracking",
    "Forecast Accuracy",
    "Production Efficiency",
    "Supplier Scorecard",
    "Territory Performance",
    "Churn Analysis",
];

const BUSINESS_OWNERS: [&str; 8] = [
    "CFO Office",
    "VP Sales",
    "COO",
    "CHRO",
    "VP Supply Chain",
    "Controller",
    "CMO",
    "CIO",
];

/// Representative upstream objects per source platform. The generator
/// samples a prefix of the pool for each record.
pub fn data_source_pool(source_type: SourceType) -> &'static [&'static str] {
    match source_type {
        SourceType::SapAbap => &[
            "ACDOCA",
            "BKPF/BSEG",
            "VBAK/VBAP",
            "EKKO/EKPO",
            "MARA/MARC",
            "PA0001/PA0002",
        ],
        SourceType::SapBw => &[
            "InfoCube",
            "DSO",
            "CompositeProvider",
            "HANA View",
            "Open ODS",
            "BEx Query",
        ],
        SourceType::Databricks => &[
            "Delta Lake",
            "Unity Catalog",
            "Feature Store",
            "MLflow Model",
            "Structured Streaming",
        ],
    }
}

/// Xorshift64 generator for reproducible demo catalogs. Not a source of
/// cryptographic randomness.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    pub fn seeded(seed: u64) -> Self {
        // xorshift has a fixed point at zero, substitute a spread constant
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-ish draw in `0..bound`. Modulo bias is irrelevant at the
    /// bounds used here.
    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn score(&mut self) -> u8 {
        self.next_below(5) as u8 + 1
    }
}

/// Builds assessed report catalogs with a fixed engine and seeded
/// randomness.
pub struct CatalogGenerator {
    engine: ClassificationEngine,
    rng: DeterministicRng,
}

impl CatalogGenerator {
    pub fn new(criteria: Vec<CriterionDefinition>, seed: u64) -> Self {
        Self {
            engine: ClassificationEngine::new(criteria),
            rng: DeterministicRng::seeded(seed),
        }
    }

    /// Generate `size` records, scoring and routing each one. Attribute
    /// assignment is round-robin where the dashboard expects even spread
    /// and random where it does not.
    pub fn generate(&mut self, size: usize) -> Result<Vec<ReportRecord>, ClassificationError> {
        let mut catalog = Vec::with_capacity(size);
        for index in 0..size {
            catalog.push(self.generate_record(index)?);
        }
        Ok(catalog)
    }

    fn generate_record(&mut self, index: usize) -> Result<ReportRecord, ClassificationError> {
        let sources = SourceType::ordered();
        let areas = FunctionalArea::ordered();
        let categories = ReportCategory::ordered();
        let frequencies = RefreshFrequency::ordered();

        let source_type = sources[index % sources.len()];
        let functional_area = areas[index % areas.len()];
        let category = categories[index % categories.len()];
        let business_owner = BUSINESS_OWNERS[index % BUSINESS_OWNERS.len()];

        let criterion_ids: Vec<_> = self
            .engine
            .criteria()
            .iter()
            .map(|criterion| criterion.id)
            .collect();
        let mut criteria_scores = BTreeMap::new();
        for id in criterion_ids {
            criteria_scores.insert(id, self.rng.score());
        }

        let outcome = self
            .engine
            .classify(&criteria_scores, source_type, index)?;

        let pool = data_source_pool(source_type);
        let picked = self.rng.next_below(3) as usize + 1;
        let data_sources: Vec<String> = pool
            .iter()
            .take(picked)
            .map(|name| (*name).to_string())
            .collect();

        let business_value = criteria_scores.get(&2).copied().unwrap_or(0);
        let rationale_driver = if business_value > 3 {
            "Business Value"
        } else {
            "Effort vs Value"
        };

        Ok(ReportRecord {
            id: format!("RPT-{:04}", index + 1),
            name: format!(
                "{} {}",
                REPORT_NAMES[index % REPORT_NAMES.len()],
                index / REPORT_NAMES.len() + 1
            ),
            source_type,
            functional_area,
            category,
            data_sources,
            business_owner: business_owner.to_string(),
            refresh_frequency: frequencies[self.rng.next_below(frequencies.len() as u64) as usize],
            last_used_days: self.rng.next_below(365) as u32,
            active_users: self.rng.next_below(50) as u32 + 1,
            created_year: 2015 + self.rng.next_below(8) as u16,
            criteria_scores,
            composite_score: round_composite(outcome.composite_score),
            migration_path: outcome.migration_path,
            status: outcome.status,
            confidence: 80 + self.rng.next_below(20) as u8,
            rationale: format!("Based on {rationale_driver} assessment"),
        })
    }
}

/// Convenience entry point used by the service and the CLI.
pub fn generate_report_catalog(
    size: usize,
    seed: u64,
) -> Result<Vec<ReportRecord>, ClassificationError> {
    CatalogGenerator::new(decision_criteria(), seed).generate(size)
}
