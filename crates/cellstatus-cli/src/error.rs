//! Error types for the cellstatus CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific
//! variants, each mapped to a process exit code.

use cellstatus_core::CoreError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const AUTH_ERROR: i32 = 2;
    pub const API_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Site {0} not found! Please provide a valid name")]
    SiteNotFound(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Auth(_) => exit_codes::AUTH_ERROR,
                CoreError::Settings(_) => exit_codes::AUTH_ERROR,
                CoreError::Http(_) => exit_codes::API_ERROR,
                CoreError::Csv(_) => exit_codes::GENERAL_ERROR,
                CoreError::Io(_) => exit_codes::GENERAL_ERROR,
                CoreError::Json(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::SiteNotFound(_) => exit_codes::INVALID_ARGS,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
