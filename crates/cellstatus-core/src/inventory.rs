//! Inventory index built from the bulk site and element listings.

use std::collections::HashMap;

use log::{error, info, warn};

use crate::api::{ApiClient, ApiResponse};
use crate::types::{Element, Site};

/// Immutable lookup tables for one run.
///
/// Built once from the two bulk listings and passed by reference to
/// everything that needs site/element resolution. A failed listing leaves
/// the affected tables empty; the run then degrades to an empty report
/// instead of aborting.
#[derive(Debug, Default)]
pub struct InventoryIndex {
    site_name_id: HashMap<String, String>,
    site_id_name: HashMap<String, String>,
    /// Site names in the order the API returned them.
    site_order: Vec<String>,
    site_elements: HashMap<String, Vec<String>>,
    elements: HashMap<String, Element>,
}

impl InventoryIndex {
    /// Fetch both inventories and build the index.
    pub async fn build(api: &ApiClient) -> Self {
        info!("fetching sites");
        let sites = api.sites().await;
        info!("fetching elements");
        let elements = api.elements().await;
        Self::from_responses(&sites, &elements)
    }

    /// Build the index from already-fetched listing responses.
    pub fn from_responses(sites: &ApiResponse, elements: &ApiResponse) -> Self {
        let mut index = Self::default();

        if sites.success {
            for item in sites.items() {
                let site: Site = match serde_json::from_value(item) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("skipping unparseable site record: {}", e);
                        continue;
                    }
                };
                index.site_order.push(site.name.clone());
                index.site_name_id.insert(site.name.clone(), site.id.clone());
                index.site_id_name.insert(site.id, site.name);
            }
        } else {
            error!("could not retrieve sites: {}", sites.dump());
        }

        if elements.success {
            for item in elements.items() {
                let element: Element = match serde_json::from_value(item) {
                    Ok(e) => e,
                    Err(e) => {
                        warn!("skipping unparseable element record: {}", e);
                        continue;
                    }
                };
                if let Some(site_id) = &element.site_id {
                    index
                        .site_elements
                        .entry(site_id.clone())
                        .or_default()
                        .push(element.id.clone());
                }
                index.elements.insert(element.id.clone(), element);
            }
        } else {
            error!("could not retrieve elements: {}", elements.dump());
        }

        index
    }

    /// Site names in API order.
    pub fn site_names(&self) -> &[String] {
        &self.site_order
    }

    pub fn contains_site(&self, name: &str) -> bool {
        self.site_name_id.contains_key(name)
    }

    pub fn site_id(&self, name: &str) -> Option<&str> {
        self.site_name_id.get(name).map(String::as_str)
    }

    pub fn site_name(&self, id: &str) -> Option<&str> {
        self.site_id_name.get(id).map(String::as_str)
    }

    /// Element ids at a site, in API order. Empty for unknown sites.
    pub fn elements_at(&self, site_id: &str) -> &[String] {
        self.site_elements
            .get(site_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sites_response() -> ApiResponse {
        ApiResponse::ok(json!({
            "items": [
                {"id": "s1", "name": "Branch West"},
                {"id": "s2", "name": "Branch East"},
            ]
        }))
    }

    fn elements_response() -> ApiResponse {
        ApiResponse::ok(json!({
            "items": [
                {"id": "e1", "name": "edge-1", "site_id": "s1", "model_name": "ion 1200-c-na"},
                {"id": "e2", "name": "edge-2", "site_id": "s1", "model_name": "ion 3000"},
                {"id": "e3", "name": "edge-3", "site_id": "s2", "model_name": "ion 1200-c5g-ww"},
                {"id": "e4", "name": "unclaimed", "site_id": null, "model_name": "ion 1200-c-na"},
            ]
        }))
    }

    #[test]
    fn test_lookup_tables() {
        let index = InventoryIndex::from_responses(&sites_response(), &elements_response());

        assert_eq!(index.site_names(), &["Branch West", "Branch East"]);
        assert_eq!(index.site_id("Branch West"), Some("s1"));
        assert_eq!(index.site_name("s2"), Some("Branch East"));
        assert!(index.contains_site("Branch East"));
        assert!(!index.contains_site("Branch North"));

        assert_eq!(index.elements_at("s1"), &["e1", "e2"]);
        assert_eq!(index.elements_at("s2"), &["e3"]);
        assert_eq!(index.element("e1").unwrap().name, "edge-1");
    }

    #[test]
    fn test_every_assigned_element_is_in_site_map() {
        let index = InventoryIndex::from_responses(&sites_response(), &elements_response());

        for element in index.elements.values() {
            if let Some(site_id) = &element.site_id {
                assert!(index.elements_at(site_id).contains(&element.id));
            }
        }
    }

    #[test]
    fn test_unassigned_element_is_still_resolvable_by_id() {
        let index = InventoryIndex::from_responses(&sites_response(), &elements_response());
        assert!(index.element("e4").is_some());
        assert!(index.site_elements.values().all(|ids| !ids.contains(&"e4".to_string())));
    }

    #[test]
    fn test_failed_site_fetch_degrades_to_empty() {
        let failed = ApiResponse::from_status(500, json!({"_error": "boom"}));
        let index = InventoryIndex::from_responses(&failed, &elements_response());

        assert!(index.site_names().is_empty());
        assert!(!index.contains_site("Branch West"));
        // element tables are still built from the successful listing
        assert!(index.element("e1").is_some());
    }

    #[test]
    fn test_failed_element_fetch_degrades_to_empty() {
        let failed = ApiResponse::transport_failure("connection refused");
        let index = InventoryIndex::from_responses(&sites_response(), &failed);

        assert_eq!(index.site_names().len(), 2);
        assert!(index.elements_at("s1").is_empty());
        assert!(index.element("e1").is_none());
    }
}
