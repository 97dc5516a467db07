//! Status-record normalization and flattening.
//!
//! Reconciles the heterogeneous, optional pieces of a cellular status record
//! (GPS block, network registration block, up to two SIM slots, up to two
//! firmware banks) with the module configuration into one fixed-width report
//! row. Absent blocks get explicit empty defaults so every row carries the
//! full column set.

use serde::Serialize;

use crate::types::{
    CellularModule, CellularStatus, Element, FirmwareStatus, GpsStatus, NetworkState, SimStatus,
};

/// Report column names, in output order.
///
/// Must stay in sync with the field order of [`ReportRow`]; the CSV layer
/// serializes rows by field order against this header.
pub const REPORT_COLUMNS: [&str; 53] = [
    "site_name",
    "element_name",
    "model_name",
    "serial_number",
    "software_version",
    "cellular_module",
    "gps_enabled",
    "radio_enabled",
    "cellular_module_description",
    "cellular_module_tags",
    "technology",
    "modem_state",
    "network_registration_state",
    "packet_service_state",
    "activation_state",
    "signal_strength_indicator",
    "active_sim",
    "manufacturer",
    "imei",
    "cellular_module_model_name",
    "cellular_module_serial_number",
    "gps_latitude",
    "gps_longitude",
    "gps_state",
    "mcc",
    "mnc",
    "cell_id",
    "frequency_band",
    "roaming",
    "firmware_1_active",
    "firmware_1_carrier",
    "firmware_1_version",
    "firmware_1_pri_version",
    "firmware_1_storage_location",
    "firmware_2_active",
    "firmware_2_carrier",
    "firmware_2_version",
    "firmware_2_pri_version",
    "firmware_2_storage_location",
    "pin_state_sim1",
    "present_sim1",
    "carrier_sim1",
    "imsi_sim1",
    "iccid_sim1",
    "pin_verification_remaining_sim1",
    "puk_unblock_remaining_sim1",
    "pin_state_sim2",
    "present_sim2",
    "carrier_sim2",
    "imsi_sim2",
    "iccid_sim2",
    "pin_verification_remaining_sim2",
    "puk_unblock_remaining_sim2",
];

/// One flattened report row: site, element, module config, and normalized
/// status joined into the fixed column set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub site_name: String,
    pub element_name: String,
    pub model_name: String,
    pub serial_number: String,
    pub software_version: String,
    pub cellular_module: String,
    pub gps_enabled: String,
    pub radio_enabled: String,
    pub cellular_module_description: String,
    pub cellular_module_tags: String,
    pub technology: String,
    pub modem_state: String,
    pub network_registration_state: String,
    pub packet_service_state: String,
    pub activation_state: String,
    pub signal_strength_indicator: String,
    pub active_sim: String,
    pub manufacturer: String,
    pub imei: String,
    pub cellular_module_model_name: String,
    pub cellular_module_serial_number: String,
    pub gps_latitude: String,
    pub gps_longitude: String,
    pub gps_state: String,
    pub mcc: String,
    pub mnc: String,
    pub cell_id: String,
    pub frequency_band: String,
    pub roaming: String,
    pub firmware_1_active: String,
    pub firmware_1_carrier: String,
    pub firmware_1_version: String,
    pub firmware_1_pri_version: String,
    pub firmware_1_storage_location: String,
    pub firmware_2_active: String,
    pub firmware_2_carrier: String,
    pub firmware_2_version: String,
    pub firmware_2_pri_version: String,
    pub firmware_2_storage_location: String,
    pub pin_state_sim1: String,
    pub present_sim1: String,
    pub carrier_sim1: String,
    pub imsi_sim1: String,
    pub iccid_sim1: String,
    pub pin_verification_remaining_sim1: String,
    pub puk_unblock_remaining_sim1: String,
    pub pin_state_sim2: String,
    pub present_sim2: String,
    pub carrier_sim2: String,
    pub imsi_sim2: String,
    pub iccid_sim2: String,
    pub pin_verification_remaining_sim2: String,
    pub puk_unblock_remaining_sim2: String,
}

/// Distribute SIM entries into slot 1 / slot 2 by their slot tag.
///
/// Anything not tagged exactly `1` lands in slot 2, unexpected tags
/// included; with duplicate tags the last entry wins. A slot with no entry
/// keeps the empty default.
fn partition_sims(entries: &[SimStatus]) -> (SimStatus, SimStatus) {
    let mut sim1 = SimStatus::empty();
    let mut sim2 = SimStatus::empty();

    for entry in entries {
        if entry.is_slot_one() {
            sim1 = entry.clone();
        } else {
            sim2 = entry.clone();
        }
    }

    (sim1, sim2)
}

/// Resolve firmware banks from the ordered firmware list.
///
/// Index 0 is bank 1, index 1 is bank 2; missing entries get the empty
/// default. When the module reports no active SIM the whole firmware read is
/// considered unreliable and both banks are suppressed to empty defaults,
/// even if the list carried data.
fn resolve_firmware(
    firmware: Option<&[FirmwareStatus]>,
    active_sim_known: bool,
) -> (FirmwareStatus, FirmwareStatus) {
    if !active_sim_known {
        return (FirmwareStatus::empty(), FirmwareStatus::empty());
    }

    match firmware {
        Some(entries) => (
            entries.first().cloned().unwrap_or_else(FirmwareStatus::empty),
            entries.get(1).cloned().unwrap_or_else(FirmwareStatus::empty),
        ),
        None => (FirmwareStatus::empty(), FirmwareStatus::empty()),
    }
}

/// Flatten one module's configuration and live status into a report row.
pub fn normalize(
    site_name: &str,
    element: &Element,
    module: &CellularModule,
    status: &CellularStatus,
) -> ReportRow {
    let gps = status.gps.clone().unwrap_or_else(GpsStatus::empty);
    let network = status
        .network_state
        .clone()
        .unwrap_or_else(NetworkState::empty);

    let (sim1, sim2) = match &status.sim {
        Some(entries) => partition_sims(entries),
        None => (SimStatus::empty(), SimStatus::empty()),
    };

    let (firmware_1, firmware_2) =
        resolve_firmware(status.firmware.as_deref(), !status.active_sim.is_null());

    ReportRow {
        site_name: site_name.to_string(),
        element_name: element.name.clone(),
        model_name: element.model_name.clone(),
        serial_number: element.serial_number.render(),
        software_version: element.software_version.render(),
        cellular_module: module.name.render(),
        gps_enabled: module.gps_enable.render(),
        radio_enabled: module.radio_on.render(),
        cellular_module_description: module.description.render(),
        cellular_module_tags: module.tags_rendered(),
        technology: status.technology.render(),
        modem_state: status.modem_state.render(),
        network_registration_state: status.network_registration_state.render(),
        packet_service_state: status.packet_service_state.render(),
        activation_state: status.activation_state.render(),
        signal_strength_indicator: status.signal_strength_indicator.render(),
        active_sim: status.active_sim.render(),
        manufacturer: status.manufacturer.render(),
        imei: status.imei.render(),
        cellular_module_model_name: status.model_name.render(),
        cellular_module_serial_number: status.serial_number.render(),
        gps_latitude: gps.latitude.render(),
        gps_longitude: gps.longitude.render(),
        gps_state: gps.state.render(),
        mcc: network.mcc.render(),
        mnc: network.mnc.render(),
        cell_id: network.cell_id.render(),
        frequency_band: network.frequency_band.render(),
        roaming: network.roaming.render(),
        firmware_1_active: firmware_1.active.render(),
        firmware_1_carrier: firmware_1.carrier.render(),
        firmware_1_version: firmware_1.fw_version.render(),
        firmware_1_pri_version: firmware_1.pri_version.render(),
        firmware_1_storage_location: firmware_1.storage_location.render(),
        firmware_2_active: firmware_2.active.render(),
        firmware_2_carrier: firmware_2.carrier.render(),
        firmware_2_version: firmware_2.fw_version.render(),
        firmware_2_pri_version: firmware_2.pri_version.render(),
        firmware_2_storage_location: firmware_2.storage_location.render(),
        pin_state_sim1: sim1.pin_state.render(),
        present_sim1: sim1.present.render(),
        carrier_sim1: sim1.carrier.render(),
        imsi_sim1: sim1.imsi.render(),
        iccid_sim1: sim1.iccid.render(),
        pin_verification_remaining_sim1: sim1.remaining_attempts_pin_verify.render(),
        puk_unblock_remaining_sim1: sim1.remaining_attempts_puk_unblock.render(),
        pin_state_sim2: sim2.pin_state.render(),
        present_sim2: sim2.present.render(),
        carrier_sim2: sim2.carrier.render(),
        imsi_sim2: sim2.imsi.render(),
        iccid_sim2: sim2.iccid.render(),
        pin_verification_remaining_sim2: sim2.remaining_attempts_pin_verify.render(),
        puk_unblock_remaining_sim2: sim2.remaining_attempts_puk_unblock.render(),
    }
}
