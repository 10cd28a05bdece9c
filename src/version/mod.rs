//! Version reporting layer
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│   Finder    │────▶│  manifest   │
//! │ (fallback)  │     │ (checkout)  │     │    + git    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ VersionInfo │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`info`]: The resolved version value and its display forms
//! - [`resolver`]: Enriched lookup with fallback to the hard-coded release
//! - [`finder`]: Trait for looking up installed package versions
//! - [`finders`]: Concrete finder implementations
//! - [`manifest`]: Cargo manifest reader
//! - [`git`]: Git checkout inspection
//! - [`error`]: Error types for finder operations

pub mod error;
pub mod finder;
pub mod finders;
pub mod git;
pub mod info;
pub mod manifest;
pub mod resolver;

pub use info::VersionInfo;
pub use resolver::VersionResolver;
