//! Response envelope for data calls.
//!
//! Every inventory/status call reports its outcome through a success flag
//! plus the JSON payload; callers check the flag and, on failure, log the
//! diagnostic dump instead of consuming the payload.

use serde_json::{json, Value};

/// Outcome of a single API data call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub success: bool,
    /// HTTP status, when the request reached the controller.
    pub status: Option<u16>,
    pub body: Value,
}

impl ApiResponse {
    /// Build from an HTTP status and decoded body.
    pub fn from_status(status: u16, body: Value) -> Self {
        Self {
            success: (200..300).contains(&status),
            status: Some(status),
            body,
        }
    }

    /// Build for a request that never produced an HTTP response.
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            body: json!({ "error": detail.into() }),
        }
    }

    /// Convenience constructor for a successful response.
    pub fn ok(body: Value) -> Self {
        Self::from_status(200, body)
    }

    /// The `items` collection of a bulk listing payload.
    pub fn items(&self) -> Vec<Value> {
        self.body
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Diagnostic dump of the response, for failure logging.
    pub fn dump(&self) -> String {
        let status = match self.status {
            Some(code) => code.to_string(),
            None => "no response".to_string(),
        };
        let body = serde_json::to_string_pretty(&self.body)
            .unwrap_or_else(|_| self.body.to_string());
        format!("status {}\n{}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_tracks_http_status() {
        assert!(ApiResponse::from_status(200, json!({})).success);
        assert!(ApiResponse::from_status(201, json!({})).success);
        assert!(!ApiResponse::from_status(404, json!({})).success);
        assert!(!ApiResponse::from_status(500, json!({})).success);
        assert!(!ApiResponse::transport_failure("connection refused").success);
    }

    #[test]
    fn test_items_extraction() {
        let resp = ApiResponse::ok(json!({"count": 2, "items": [{"id": "a"}, {"id": "b"}]}));
        assert_eq!(resp.items().len(), 2);

        let empty = ApiResponse::ok(json!({"count": 0}));
        assert!(empty.items().is_empty());
    }

    #[test]
    fn test_dump_includes_status_and_body() {
        let resp = ApiResponse::from_status(403, json!({"_error": [{"code": "FORBIDDEN"}]}));
        let dump = resp.dump();
        assert!(dump.contains("status 403"));
        assert!(dump.contains("FORBIDDEN"));

        let transport = ApiResponse::transport_failure("dns failure");
        assert!(transport.dump().contains("no response"));
    }
}
