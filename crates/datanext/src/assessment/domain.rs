use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria::CriterionId;

/// Origin system of a legacy report. Serialized with the labels the
/// downstream tooling expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "SAP ABAP")]
    SapAbap,
    #[serde(rename = "SAP BW")]
    SapBw,
    #[serde(rename = "Databricks")]
    Databricks,
}

impl SourceType {
    pub const fn ordered() -> [Self; 3] {
        [Self::SapAbap, Self::SapBw, Self::Databricks]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SapAbap => "SAP ABAP",
            Self::SapBw => "SAP BW",
            Self::Databricks => "Databricks",
        }
    }
}

/// Recommended landing zone for a report after assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MigrationPath {
    #[serde(rename = "S/4HANA Embedded Analytics")]
    S4HanaEmbeddedAnalytics,
    #[serde(rename = "SAP Datasphere / BDC")]
    SapDatasphereBdc,
    #[serde(rename = "Databricks")]
    Databricks,
    #[serde(rename = "SAP BW HANA Cloud")]
    SapBwHanaCloud,
    #[serde(rename = "Retire")]
    Retire,
}

impl MigrationPath {
    /// Modernization targets in rotation order. `Retire` is an outcome,
    /// not a target, and is excluded.
    pub const fn targets() -> [Self; 4] {
        [
            Self::S4HanaEmbeddedAnalytics,
            Self::SapDatasphereBdc,
            Self::Databricks,
            Self::SapBwHanaCloud,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::S4HanaEmbeddedAnalytics => "S/4HANA Embedded Analytics",
            Self::SapDatasphereBdc => "SAP Datasphere / BDC",
            Self::Databricks => "Databricks",
            Self::SapBwHanaCloud => "SAP BW HANA Cloud",
            Self::Retire => "Retire",
        }
    }
}

/// Disposition of a report within the catalog. `Needed` and `Deprecated`
/// are legacy synonyms that still appear in imported inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Retain,
    Retire,
    Needed,
    Redundant,
    Deprecated,
}

impl ReportStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retain => "Retain",
            Self::Retire => "Retire",
            Self::Needed => "Needed",
            Self::Redundant => "Redundant",
            Self::Deprecated => "Deprecated",
        }
    }
}

/// Business function a report serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalArea {
    Finance,
    Sales,
    #[serde(rename = "Supply Chain")]
    SupplyChain,
    #[serde(rename = "HR")]
    Hr,
    Manufacturing,
    Procurement,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Marketing,
}

impl FunctionalArea {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Finance,
            Self::Sales,
            Self::SupplyChain,
            Self::Hr,
            Self::Manufacturing,
            Self::Procurement,
            Self::CustomerService,
            Self::Marketing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Sales => "Sales",
            Self::SupplyChain => "Supply Chain",
            Self::Hr => "HR",
            Self::Manufacturing => "Manufacturing",
            Self::Procurement => "Procurement",
            Self::CustomerService => "Customer Service",
            Self::Marketing => "Marketing",
        }
    }
}

/// Shape of the report deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    #[serde(rename = "Operational Dashboard")]
    OperationalDashboard,
    #[serde(rename = "KPI Scorecard")]
    KpiScorecard,
    #[serde(rename = "Management Report")]
    ManagementReport,
    #[serde(rename = "Analytical Report")]
    AnalyticalReport,
    #[serde(rename = "Transactional Report")]
    TransactionalReport,
    #[serde(rename = "Compliance Report")]
    ComplianceReport,
}

impl ReportCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::OperationalDashboard,
            Self::KpiScorecard,
            Self::ManagementReport,
            Self::AnalyticalReport,
            Self::TransactionalReport,
            Self::ComplianceReport,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OperationalDashboard => "Operational Dashboard",
            Self::KpiScorecard => "KPI Scorecard",
            Self::ManagementReport => "Management Report",
            Self::AnalyticalReport => "Analytical Report",
            Self::TransactionalReport => "Transactional Report",
            Self::ComplianceReport => "Compliance Report",
        }
    }
}

/// How often the report refreshes in production today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefreshFrequency {
    #[serde(rename = "Real-time")]
    RealTime,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl RefreshFrequency {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::RealTime,
            Self::Hourly,
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RealTime => "Real-time",
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// One assessed report in the migration catalog.
///
/// `composite_score` is persisted rounded to two decimals; the scores map
/// keeps the raw 1-5 ratings so the composite can be recomputed under
/// different weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub name: String,
    pub source_type: SourceType,
    pub functional_area: FunctionalArea,
    pub category: ReportCategory,
    pub data_sources: Vec<String>,
    pub business_owner: String,
    pub refresh_frequency: RefreshFrequency,
    pub last_used_days: u32,
    pub active_users: u32,
    pub created_year: u16,
    pub criteria_scores: BTreeMap<CriterionId, u8>,
    pub composite_score: f64,
    pub migration_path: MigrationPath,
    pub status: ReportStatus,
    pub confidence: u8,
    pub rationale: String,
}
