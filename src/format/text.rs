//! Plain-text rendering of query results and listings.

use crate::model::{DocumentSummary, IngestSummary, PackageMatch};

/// Placeholder printed for a field the SBOM did not declare.
pub const ABSENT: &str = "-";

/// Render one query result row.
#[must_use]
pub fn format_match_line(row: &PackageMatch) -> String {
    format!(
        "Document: {}, Component: {}, Version: {}, License: {}",
        row.document,
        display_field(row.name.as_deref()),
        display_field(row.version.as_deref()),
        display_field(row.license.as_deref()),
    )
}

#[must_use]
pub fn format_document_line(document: &DocumentSummary) -> String {
    let noun = if document.package_count == 1 {
        "package"
    } else {
        "packages"
    };
    format!(
        "{:>6}  {}  ({} {noun})",
        document.id, document.name, document.package_count
    )
}

/// Render the two-line ingest report.
#[must_use]
pub fn format_ingest_summary(summary: &IngestSummary) -> [String; 2] {
    [
        format!("Inserted document with ID {}", summary.document_id),
        format!("Inserted {} packages", summary.packages),
    ]
}

fn display_field(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}
