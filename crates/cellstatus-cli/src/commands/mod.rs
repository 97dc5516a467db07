//! Command implementations.

pub mod report;

pub use report::run_report;
