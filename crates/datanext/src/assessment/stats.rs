use serde::Serialize;

use super::domain::{MigrationPath, ReportRecord, ReportStatus, SourceType};

/// Record counts per legacy platform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceBreakdown {
    #[serde(rename = "SAP ABAP")]
    pub sap_abap: usize,
    #[serde(rename = "SAP BW")]
    pub sap_bw: usize,
    #[serde(rename = "Databricks")]
    pub databricks: usize,
}

/// Record counts per recommended landing zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathBreakdown {
    #[serde(rename = "S/4HANA Embedded Analytics")]
    pub s4hana_embedded_analytics: usize,
    #[serde(rename = "SAP Datasphere / BDC")]
    pub sap_datasphere_bdc: usize,
    #[serde(rename = "Databricks")]
    pub databricks: usize,
    #[serde(rename = "SAP BW HANA Cloud")]
    pub sap_bw_hana_cloud: usize,
    #[serde(rename = "Retire")]
    pub retire: usize,
}

/// Catalog roll-up consumed by the dashboard tiles.
///
/// `pending` holds whatever the retain/retire buckets do not claim, which
/// today means the `Redundant` status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub retain: usize,
    pub retire: usize,
    pub pending: usize,
    pub by_source: SourceBreakdown,
    pub by_path: PathBreakdown,
}

const fn counts_as_retain(status: ReportStatus) -> bool {
    matches!(status, ReportStatus::Retain | ReportStatus::Needed)
}

const fn counts_as_retire(status: ReportStatus) -> bool {
    matches!(status, ReportStatus::Retire | ReportStatus::Deprecated)
}

/// Single-pass reduction of the catalog. Pure; the input is not mutated.
pub fn compute_stats(reports: &[ReportRecord]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: reports.len(),
        ..CatalogStats::default()
    };

    for report in reports {
        if counts_as_retain(report.status) {
            stats.retain += 1;
        }
        if counts_as_retire(report.status) {
            stats.retire += 1;
        }

        match report.source_type {
            SourceType::SapAbap => stats.by_source.sap_abap += 1,
            SourceType::SapBw => stats.by_source.sap_bw += 1,
            SourceType::Databricks => stats.by_source.databricks += 1,
        }

        match report.migration_path {
            MigrationPath::S4HanaEmbeddedAnalytics => {
                stats.by_path.s4hana_embedded_analytics += 1;
            }
            MigrationPath::SapDatasphereBdc => stats.by_path.sap_datasphere_bdc += 1,
            MigrationPath::Databricks => stats.by_path.databricks += 1,
            MigrationPath::SapBwHanaCloud => stats.by_path.sap_bw_hana_cloud += 1,
            MigrationPath::Retire => stats.by_path.retire += 1,
        }
    }

    stats.pending = stats.total.saturating_sub(stats.retain + stats.retire);
    stats
}
