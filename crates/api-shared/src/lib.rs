//! # API Shared
//!
//! Shared request/response types for the VPR Links APIs.
//!
//! Contains:
//! - Wire types for link sets and rendered fragments (`dto` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `vpr-links` CLI.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
