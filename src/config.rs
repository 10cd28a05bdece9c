use std::path::PathBuf;
use std::sync::LazyLock;

// =============================================================================
// Release constants
// =============================================================================

/// Hard-coded release as (major, minor, patch)
pub const VERSION_TUPLE: (u64, u64, u64) = (11, 0, 0);

/// Hard-coded release string, the dotted form of [`VERSION_TUPLE`]
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    let (major, minor, patch) = VERSION_TUPLE;
    semver::Version::new(major, minor, patch).to_string()
});

/// Project source location reported when no checkout metadata is available
pub const PROJECT_URL: &str = "https://github.com/jantman/awslimitchecker";

/// Package name handed to the version finder
pub const PACKAGE_NAME: &str = "awslimitchecker";

// =============================================================================
// Environment
// =============================================================================

/// Set to exactly `true` to keep full diagnostics from the lookup subsystems
pub const DEBUG_ENV_VAR: &str = "VERSIONCHECK_DEBUG";

/// Base `EnvFilter` directive for the process subscriber
pub const LOG_ENV_VAR: &str = "AWSLIMITCHECKER_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tracing targets of the version finder, the manifest reader and git,
/// matched exactly when suppressing
pub const SUPPRESSED_TARGETS: [&str; 3] = ["versionfinder", "manifest", "git"];

/// Runtime settings for version resolution
#[derive(Debug, Clone, PartialEq)]
pub struct VersionCheckConfig {
    /// Skip diagnostic suppression for the lookup subsystems
    pub debug: bool,
    /// Base filter directive for the subscriber
    pub log_filter: String,
    /// Source tree inspected for checkout metadata
    pub source_dir: PathBuf,
}

impl Default for VersionCheckConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            source_dir: default_source_dir(),
        }
    }
}

impl VersionCheckConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(DEBUG_ENV_VAR).as_deref() == Some("true");
        let log_filter = lookup(LOG_ENV_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            debug,
            log_filter,
            ..Self::default()
        }
    }
}

/// Directory this crate was built from.
pub fn default_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
