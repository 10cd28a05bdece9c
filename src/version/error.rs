use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FindError {
    #[error("Required tool `{tool}` is not available")]
    Unavailable { tool: String },

    #[error("Command `{command}` failed with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("Package {package} not found in {}", .manifest.display())]
    PackageNotFound { package: String, manifest: PathBuf },

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("No source URL known for package {package}")]
    MissingUrl { package: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] semver::Error),
}

impl FindError {
    /// True when the lookup machinery itself cannot run, as opposed to a
    /// lookup that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FindError::Unavailable { .. })
    }
}
