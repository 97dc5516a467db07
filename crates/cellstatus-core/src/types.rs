//! Data model for inventory entities and cellular module status.
//!
//! Status payloads are loosely typed upstream: the same field may arrive as a
//! string, number, bool, or be absent entirely. `Scalar` carries such values
//! through to the report without inventing types for them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely-typed scalar field from an API payload.
///
/// Renders to a CSV cell as: null -> empty, string -> unquoted text,
/// bool/number -> their decimal/text form, anything else -> compact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub Value);

impl Scalar {
    /// The explicit empty-string default used when a whole nested block is
    /// synthesized (as opposed to a field that arrived as null).
    pub fn empty() -> Self {
        Scalar(Value::String(String::new()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn render(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar(Value::Null)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A physical/network location grouping one or more elements.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
}

/// A managed edge device. Belongs to exactly one site.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub serial_number: Scalar,
    #[serde(default)]
    pub software_version: Scalar,
}

/// Cellular module configuration, as returned by the per-element module list.
#[derive(Debug, Clone, Deserialize)]
pub struct CellularModule {
    pub id: String,
    #[serde(default)]
    pub name: Scalar,
    #[serde(default)]
    pub description: Scalar,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub gps_enable: Scalar,
    #[serde(default)]
    pub radio_on: Scalar,
}

impl CellularModule {
    /// Tag list rendered for the report (comma-joined, empty when absent).
    pub fn tags_rendered(&self) -> String {
        match &self.tags {
            Some(tags) => tags.join(","),
            None => String::new(),
        }
    }
}

/// Live status of a cellular module, keyed by the module id.
///
/// Any of the nested blocks may be missing; the normalizer substitutes the
/// matching `empty()` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellularStatus {
    #[serde(default)]
    pub technology: Scalar,
    #[serde(default)]
    pub modem_state: Scalar,
    #[serde(default)]
    pub network_registration_state: Scalar,
    #[serde(default)]
    pub packet_service_state: Scalar,
    #[serde(default)]
    pub activation_state: Scalar,
    #[serde(default)]
    pub signal_strength_indicator: Scalar,
    #[serde(default)]
    pub active_sim: Scalar,
    #[serde(default)]
    pub manufacturer: Scalar,
    #[serde(default)]
    pub imei: Scalar,
    #[serde(default)]
    pub model_name: Scalar,
    #[serde(default)]
    pub serial_number: Scalar,
    #[serde(default)]
    pub gps: Option<GpsStatus>,
    #[serde(default)]
    pub network_state: Option<NetworkState>,
    #[serde(default)]
    pub sim: Option<Vec<SimStatus>>,
    #[serde(default)]
    pub firmware: Option<Vec<FirmwareStatus>>,
}

/// GPS fix block of a status record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpsStatus {
    #[serde(default)]
    pub latitude: Scalar,
    #[serde(default)]
    pub longitude: Scalar,
    #[serde(default)]
    pub state: Scalar,
}

impl GpsStatus {
    pub fn empty() -> Self {
        Self {
            latitude: Scalar::empty(),
            longitude: Scalar::empty(),
            state: Scalar::empty(),
        }
    }
}

/// Network registration block of a status record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkState {
    #[serde(default)]
    pub mcc: Scalar,
    #[serde(default)]
    pub mnc: Scalar,
    #[serde(default)]
    pub cell_id: Scalar,
    #[serde(default)]
    pub frequency_band: Scalar,
    #[serde(default)]
    pub roaming: Scalar,
}

impl NetworkState {
    pub fn empty() -> Self {
        Self {
            mcc: Scalar::empty(),
            mnc: Scalar::empty(),
            cell_id: Scalar::empty(),
            frequency_band: Scalar::empty(),
            roaming: Scalar::empty(),
        }
    }
}

/// One SIM slot entry in a status record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimStatus {
    #[serde(default)]
    pub slot_number: Scalar,
    #[serde(default)]
    pub carrier: Scalar,
    #[serde(default)]
    pub iccid: Scalar,
    #[serde(default)]
    pub imsi: Scalar,
    #[serde(default)]
    pub pin_state: Scalar,
    #[serde(default)]
    pub present: Scalar,
    #[serde(default)]
    pub remaining_attempts_pin_verify: Scalar,
    #[serde(default)]
    pub remaining_attempts_puk_unblock: Scalar,
}

impl SimStatus {
    pub fn empty() -> Self {
        Self {
            slot_number: Scalar::empty(),
            carrier: Scalar::empty(),
            iccid: Scalar::empty(),
            imsi: Scalar::empty(),
            pin_state: Scalar::empty(),
            present: Scalar::empty(),
            remaining_attempts_pin_verify: Scalar::empty(),
            remaining_attempts_puk_unblock: Scalar::empty(),
        }
    }

    /// Slot tag check: exactly the number 1 means slot 1, everything else
    /// (2, unexpected values, null) is treated as slot 2.
    pub fn is_slot_one(&self) -> bool {
        self.slot_number.0.as_u64() == Some(1)
    }
}

/// One firmware bank entry in a status record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirmwareStatus {
    #[serde(default)]
    pub active: Scalar,
    #[serde(default)]
    pub carrier: Scalar,
    #[serde(default)]
    pub fw_version: Scalar,
    #[serde(default)]
    pub pri_version: Scalar,
    #[serde(default)]
    pub storage_location: Scalar,
}

impl FirmwareStatus {
    pub fn empty() -> Self {
        Self {
            active: Scalar::empty(),
            carrier: Scalar::empty(),
            fw_version: Scalar::empty(),
            pri_version: Scalar::empty(),
            storage_location: Scalar::empty(),
        }
    }
}
