//! Console output for run results.

use std::path::Path;

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};

use cellstatus_core::ReportSummary;

/// Print the per-site row-count summary and the output location.
pub fn print_summary(summary: &ReportSummary, path: &Path) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Rows"]);

    for (site, rows) in &summary.per_site {
        table.add_row(vec![Cell::new(site), Cell::new(rows.to_string())]);
    }

    println!("{table}");
    println!(
        "\n{} row(s) written to {}",
        summary.total_rows().to_string().bold(),
        path.display()
    );
}
