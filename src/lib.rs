//! Version reporting for awslimitchecker
//!
//! - [`config`]: build-time constants and environment-driven settings
//! - [`logging`]: tracing subscriber setup and diagnostic suppression
//! - [`version`]: version value, lookup collaborator and resolver

pub mod config;
pub mod logging;
pub mod version;
