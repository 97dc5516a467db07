//! Remote API layer.
//!
//! Provides the authenticated HTTP client plus the response envelope every
//! data call is reported in.

pub mod auth;
pub mod client;
pub mod response;

pub use auth::AuthSettings;
pub use client::ApiClient;
pub use response::ApiResponse;
