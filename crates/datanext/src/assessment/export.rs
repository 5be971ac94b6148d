use std::io::Write;

use super::domain::ReportRecord;

/// Failures while rendering the catalog export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("export produced non-UTF-8 output")]
    Encoding,
}

const HEADER: [&str; 16] = [
    "id",
    "name",
    "source_type",
    "functional_area",
    "category",
    "data_sources",
    "business_owner",
    "refresh_frequency",
    "last_used_days",
    "active_users",
    "created_year",
    "criteria_scores",
    "composite_score",
    "migration_path",
    "status",
    "confidence",
];

/// Stream the catalog as CSV. One row per report, scores flattened into a
/// `id:score` list so the file stays spreadsheet-friendly.
pub fn write_catalog_csv<W: Write>(reports: &[ReportRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for report in reports {
        let scores = report
            .criteria_scores
            .iter()
            .map(|(id, score)| format!("{id}:{score}"))
            .collect::<Vec<_>>()
            .join(" ");

        csv_writer.write_record([
            report.id.as_str(),
            report.name.as_str(),
            report.source_type.label(),
            report.functional_area.label(),
            report.category.label(),
            report.data_sources.join("; ").as_str(),
            report.business_owner.as_str(),
            report.refresh_frequency.label(),
            report.last_used_days.to_string().as_str(),
            report.active_users.to_string().as_str(),
            report.created_year.to_string().as_str(),
            scores.as_str(),
            format!("{:.2}", report.composite_score).as_str(),
            report.migration_path.label(),
            report.status.label(),
            report.confidence.to_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the catalog to an in-memory CSV string.
pub fn render_catalog_csv(reports: &[ReportRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_catalog_csv(reports, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Encoding)
}
