//! Report command implementation.

use std::fs::File;

use chrono::Utc;
use log::info;

use cellstatus_core::{
    report_filename, write_report, ApiClient, AuthSettings, CoreError, InventoryIndex,
};

use crate::cli::{Cli, ALL_SITES};
use crate::error::{CliError, Result};
use crate::output::print_summary;

/// Run the report: login, build the inventory index, resolve the scope,
/// then stream one CSV row per cellular module into a fresh output file.
pub async fn run_report(args: Cli) -> Result<()> {
    let settings = AuthSettings::load()?;

    let mut api = ApiClient::new(args.tprod);
    api.login(&settings).await?;
    let tenant_name = api.tenant_name.clone().ok_or_else(|| {
        CoreError::Auth("login did not yield a tenant identity".to_string())
    })?;

    info!("building inventory index");
    let index = InventoryIndex::build(&api).await;

    let site_names = resolve_scope(&index, &args.site_name)?;

    let path = std::env::current_dir()?.join(report_filename(&tenant_name, Utc::now()));
    let file = File::create(&path)?;

    let summary = write_report(&api, &index, &site_names, file).await?;

    print_summary(&summary, &path);
    Ok(())
}

/// Resolve the requested scope to a concrete site-name list.
///
/// An unknown site name is fatal and reported before the output file is
/// created.
fn resolve_scope(index: &InventoryIndex, site_name: &str) -> Result<Vec<String>> {
    if site_name == ALL_SITES {
        Ok(index.site_names().to_vec())
    } else if index.contains_site(site_name) {
        Ok(vec![site_name.to_string()])
    } else {
        Err(CliError::SiteNotFound(site_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellstatus_core::ApiResponse;
    use serde_json::json;

    fn index() -> InventoryIndex {
        InventoryIndex::from_responses(
            &ApiResponse::ok(json!({"items": [
                {"id": "s1", "name": "Branch West"},
                {"id": "s2", "name": "Branch East"}
            ]})),
            &ApiResponse::ok(json!({"items": []})),
        )
    }

    #[test]
    fn test_all_sites_scope_follows_inventory_order() {
        let sites = resolve_scope(&index(), ALL_SITES).unwrap();
        assert_eq!(sites, ["Branch West", "Branch East"]);
    }

    #[test]
    fn test_single_site_scope() {
        let sites = resolve_scope(&index(), "Branch East").unwrap();
        assert_eq!(sites, ["Branch East"]);
    }

    #[test]
    fn test_unknown_site_is_fatal() {
        let err = resolve_scope(&index(), "Branch North").unwrap_err();
        assert!(matches!(err, CliError::SiteNotFound(_)));
        assert_eq!(err.exit_code(), crate::error::exit_codes::INVALID_ARGS);
    }
}
