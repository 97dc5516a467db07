//! Report engine: drives the site/element/module iteration and writes rows.

use std::io::Write;

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::api::ApiResponse;
use crate::error::CoreError;
use crate::hardware::is_cellular_capable;
use crate::inventory::InventoryIndex;
use crate::normalize::{normalize, REPORT_COLUMNS};
use crate::types::{CellularModule, CellularStatus};

/// Source of per-element module lists and per-module status records.
///
/// Implemented by `ApiClient`; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait ModuleSource {
    async fn cellular_modules(&self, element_id: &str) -> ApiResponse;
    async fn cellular_module_status(&self, element_id: &str, module_id: &str) -> ApiResponse;
}

/// Row counts per site, in iteration order.
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub per_site: Vec<(String, usize)>,
}

impl ReportSummary {
    pub fn total_rows(&self) -> usize {
        self.per_site.iter().map(|(_, count)| count).sum()
    }
}

/// Output file name for a run: sanitized tenant name plus UTC start time.
pub fn report_filename(tenant_name: &str, started_at: DateTime<Utc>) -> String {
    let tenant: String = tenant_name
        .chars()
        .filter(|c| *c != ' ' && *c != '/')
        .collect();
    format!(
        "{}_cellularstatus_{}.csv",
        tenant,
        started_at.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Write the report for the given sites to `out`.
///
/// Strictly sequential: one remote call at a time. Per-module failures are
/// logged and skipped without a row; the writer is flushed before returning
/// so mid-loop failures never leave buffered rows behind.
pub async fn write_report<S: ModuleSource, W: Write>(
    source: &S,
    index: &InventoryIndex,
    site_names: &[String],
    out: W,
) -> Result<ReportSummary, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(REPORT_COLUMNS)?;

    let mut summary = ReportSummary::default();

    info!("iterating through sites");
    for site_name in site_names {
        info!("{}", site_name);
        let rows = match index.site_id(site_name) {
            Some(site_id) => {
                write_site_rows(source, index, site_name, site_id, &mut writer).await?
            }
            None => {
                warn!("  site {} missing from inventory, skipping", site_name);
                0
            }
        };
        summary.per_site.push((site_name.clone(), rows));
    }

    writer.flush()?;
    Ok(summary)
}

async fn write_site_rows<S: ModuleSource, W: Write>(
    source: &S,
    index: &InventoryIndex,
    site_name: &str,
    site_id: &str,
    writer: &mut csv::Writer<W>,
) -> Result<usize, CoreError> {
    let element_ids = index.elements_at(site_id);
    if element_ids.is_empty() {
        info!("  no devices found");
        return Ok(0);
    }

    let mut rows = 0;
    for element_id in element_ids {
        let Some(element) = index.element(element_id) else {
            continue;
        };

        if !is_cellular_capable(&element.model_name) {
            info!(
                "  {} [{}]: no cellular support",
                element.name, element.model_name
            );
            continue;
        }
        info!("  {} [{}]", element.name, element.model_name);

        let modules = source.cellular_modules(element_id).await;
        if !modules.success {
            error!(
                "could not retrieve cellular modules for {}: {}",
                element.name,
                modules.dump()
            );
            continue;
        }

        for item in modules.items() {
            let module: CellularModule = match serde_json::from_value(item) {
                Ok(m) => m,
                Err(e) => {
                    warn!("skipping unparseable cellular module on {}: {}", element.name, e);
                    continue;
                }
            };

            let status_resp = source.cellular_module_status(element_id, &module.id).await;
            if !status_resp.success {
                error!(
                    "could not retrieve cellular module status for {} on {}: {}",
                    module.name,
                    element.name,
                    status_resp.dump()
                );
                continue;
            }

            let status: CellularStatus = match serde_json::from_value(status_resp.body.clone()) {
                Ok(s) => s,
                Err(e) => {
                    warn!(
                        "skipping undecodable status for module {} on {}: {}",
                        module.name, element.name, e
                    );
                    continue;
                }
            };

            let row = normalize(site_name, element, &module, &status);
            writer.serialize(&row)?;
            rows += 1;
        }
    }

    Ok(rows)
}
