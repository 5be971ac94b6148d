use crate::infra::InMemoryCriteriaRegistry;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use datanext::assessment::{
    AssessmentService, CatalogQuery, ClassificationRequest, SourceType, DEFAULT_CATALOG_SEED,
    DEFAULT_CATALOG_SIZE,
};
use datanext::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogReportArgs {
    /// Number of reports to generate (defaults to the standard catalog size)
    #[arg(long)]
    pub(crate) size: Option<usize>,
    /// Seed for the catalog generator (fixed default for reproducible runs)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Write the full catalog as CSV to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of reports to generate for the demo catalog
    #[arg(long)]
    pub(crate) size: Option<usize>,
    /// Seed for the demo catalog
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the weight tuning portion of the demo
    #[arg(long)]
    pub(crate) skip_tuning: bool,
}

fn build_service(
    size: Option<usize>,
    seed: Option<u64>,
) -> Result<Arc<AssessmentService<InMemoryCriteriaRegistry>>, AppError> {
    let registry = Arc::new(InMemoryCriteriaRegistry::default());
    let service = AssessmentService::new(
        registry,
        size.unwrap_or(DEFAULT_CATALOG_SIZE),
        seed.unwrap_or(DEFAULT_CATALOG_SEED),
    )?;
    Ok(Arc::new(service))
}

pub(crate) fn run_catalog_report(args: CatalogReportArgs) -> Result<(), AppError> {
    let CatalogReportArgs { size, seed, export } = args;
    let service = build_service(size, seed)?;

    render_catalog_summary(&service);

    if let Some(path) = export {
        let rendered = service.export_csv()?;
        std::fs::write(&path, rendered)?;
        println!("\nCatalog exported to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        size,
        seed,
        skip_tuning,
    } = args;

    println!("DataNext assessment demo");
    let service = build_service(size, seed)?;
    render_catalog_summary(&service);

    println!("\nSample catalog entries");
    let sample = service.list_reports(&CatalogQuery {
        limit: Some(5),
        ..CatalogQuery::default()
    });
    for report in &sample.reports {
        println!(
            "- {} {} | {} | composite {:.2} -> {} ({})",
            report.id,
            report.name,
            report.source_type.label(),
            report.composite_score,
            report.migration_path.label(),
            report.status.label()
        );
    }

    println!("\nAd-hoc classification");
    let request = ClassificationRequest {
        criteria_scores: (1..=8).map(|id| (id, 4)).collect(),
        source_type: SourceType::SapBw,
        catalog_index: 0,
    };
    let view = service.classify(&request)?;
    println!(
        "- uniform fours on SAP BW -> composite {:.2}, {} ({})",
        view.composite_score,
        view.migration_path.label(),
        view.status.label()
    );

    if skip_tuning {
        return Ok(());
    }

    println!("\nWeight tuning");
    let before = service.criteria_view()?;
    println!(
        "- weights sum to {} (balanced: {})",
        before.weight_total, before.balanced
    );

    let updated = service.set_weight(2, 30)?;
    println!(
        "- raised '{}' weight to {}",
        updated.name, updated.weight
    );

    let after = service.criteria_view()?;
    println!(
        "- weights now sum to {} (balanced: {})",
        after.weight_total, after.balanced
    );

    let retuned = service.classify(&request)?;
    println!(
        "- same ratings now score {:.2} (was {:.2}); stored catalog is unchanged",
        retuned.composite_score, view.composite_score
    );

    Ok(())
}

fn render_catalog_summary(service: &AssessmentService<InMemoryCriteriaRegistry>) {
    let stats = service.stats();
    let generated = service.generated_at().with_timezone(&Local);

    println!(
        "\nAssessment catalog ({} reports, generated {})",
        stats.total,
        generated.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "- disposition: {} retain | {} retire | {} pending",
        stats.retain, stats.retire, stats.pending
    );
    println!(
        "- sources: SAP ABAP {} | SAP BW {} | Databricks {}",
        stats.by_source.sap_abap, stats.by_source.sap_bw, stats.by_source.databricks
    );
    println!("Migration paths:");
    println!(
        "  - S/4HANA Embedded Analytics: {}",
        stats.by_path.s4hana_embedded_analytics
    );
    println!(
        "  - SAP Datasphere / BDC: {}",
        stats.by_path.sap_datasphere_bdc
    );
    println!("  - Databricks: {}", stats.by_path.databricks);
    println!("  - SAP BW HANA Cloud: {}", stats.by_path.sap_bw_hana_cloud);
    println!("  - Retire: {}", stats.by_path.retire);
}
