//! Authenticated HTTP client for the SD-WAN controller API.

use log::{debug, info};
use serde_json::Value;

use crate::error::CoreError;
use crate::report::ModuleSource;

use super::auth::AuthSettings;
use super::response::ApiResponse;

/// Production controller base URL.
pub const PROD_CONTROLLER: &str = "https://api.sase.paloaltonetworks.com";

/// QA controller base URL, selected by the tprod switch.
pub const QA_CONTROLLER: &str = "https://qa.api.sase.paloaltonetworks.com";

/// OAuth2 token endpoint for client-credential login.
const TOKEN_URL: &str = "https://auth.apps.paloaltonetworks.com/am/oauth2/access_token";

const SITES_PATH: &str = "/sdwan/v4.11/api/sites";
const ELEMENTS_PATH: &str = "/sdwan/v3.1/api/elements";
const PROFILE_PATH: &str = "/sdwan/v2.1/api/profile";

/// HTTP client holding the session token and tenant identity.
///
/// All data calls are sequential request/response round trips; the client
/// never retries and applies no timeout of its own.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    token: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_name: Option<String>,
}

impl ApiClient {
    /// Create a client against the production or QA controller.
    pub fn new(qa_env: bool) -> Self {
        let base = if qa_env { QA_CONTROLLER } else { PROD_CONTROLLER };
        Self::with_base_url(base, TOKEN_URL)
    }

    /// Create a client against explicit endpoints (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token_url: token_url.into(),
            token: None,
            tenant_id: None,
            tenant_name: None,
        }
    }

    /// Client-credential login.
    ///
    /// Requests an access token scoped to the tenant service group, then
    /// resolves the tenant identity from the profile endpoint. Failure at
    /// any step leaves the client without a tenant and returns an error.
    pub async fn login(&mut self, settings: &AuthSettings) -> Result<(), CoreError> {
        info!("logging in to {}", self.base_url);

        let scope = format!("tsg_id:{}", settings.tsg_id);
        let token_resp = self
            .http
            .post(&self.token_url)
            .basic_auth(&settings.client_id, Some(&settings.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", scope.as_str()),
            ])
            .send()
            .await?;

        if !token_resp.status().is_success() {
            return Err(CoreError::Auth(format!(
                "token request rejected with status {}",
                token_resp.status()
            )));
        }

        let token_body: Value = token_resp.json().await?;
        let token = token_body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::Auth("token response had no access_token".to_string()))?
            .to_string();
        self.token = Some(token);

        let profile = self.get(PROFILE_PATH).await;
        if !profile.success {
            return Err(CoreError::Auth(format!(
                "profile lookup failed: {}",
                profile.dump()
            )));
        }

        let tenant_id = profile
            .body
            .get("tenant_id")
            .and_then(Value::as_str)
            .map(str::to_string);
        let tenant_name = profile
            .body
            .get("tenant_name")
            .or_else(|| profile.body.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string);

        match (tenant_id, tenant_name) {
            (Some(id), Some(name)) => {
                info!("logged in as tenant {} ({})", name, id);
                self.tenant_id = Some(id);
                self.tenant_name = Some(name);
                Ok(())
            }
            _ => Err(CoreError::Auth(
                "login did not yield a tenant identity".to_string(),
            )),
        }
    }

    /// GET a controller path, folding transport errors into the envelope.
    async fn get(&self, path: &str) -> ApiResponse {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return ApiResponse::transport_failure(e.to_string()),
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => return ApiResponse::transport_failure(e.to_string()),
        };
        let body =
            serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text));

        ApiResponse::from_status(status, body)
    }

    /// Bulk site listing.
    pub async fn sites(&self) -> ApiResponse {
        self.get(SITES_PATH).await
    }

    /// Bulk element listing.
    pub async fn elements(&self) -> ApiResponse {
        self.get(ELEMENTS_PATH).await
    }
}

impl ModuleSource for ApiClient {
    async fn cellular_modules(&self, element_id: &str) -> ApiResponse {
        self.get(&format!(
            "/sdwan/v2.0/api/elements/{}/cellular_modules",
            element_id
        ))
        .await
    }

    async fn cellular_module_status(&self, element_id: &str, module_id: &str) -> ApiResponse {
        self.get(&format!(
            "/sdwan/v2.0/api/elements/{}/cellular_modules/{}/status",
            element_id, module_id
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_selection() {
        let prod = ApiClient::new(false);
        assert_eq!(prod.base_url, PROD_CONTROLLER);
        assert!(prod.tenant_id.is_none());

        let qa = ApiClient::new(true);
        assert_eq!(qa.base_url, QA_CONTROLLER);
    }
}
