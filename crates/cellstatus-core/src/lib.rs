//! Core library for the cellular status report tool.
//!
//! Queries the SD-WAN controller for cellular module configuration and live
//! status across an organizational scope and flattens every module into one
//! fixed-schema report row.

pub mod api;
pub mod error;
pub mod hardware;
pub mod inventory;
pub mod normalize;
pub mod report;
pub mod types;

pub use api::{ApiClient, ApiResponse, AuthSettings};
pub use error::{CoreError, Result};
pub use inventory::InventoryIndex;
pub use normalize::{normalize, ReportRow, REPORT_COLUMNS};
pub use report::{report_filename, write_report, ModuleSource, ReportSummary};
