//! Version finder trait for looking up installed package versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::FindError;

/// What a finder learned about an installed package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundVersion {
    pub version: String,
    pub url: String,
    pub git_is_dirty: bool,
    pub git_tag: Option<String>,
    pub git_commit: Option<String>,
}

/// Trait for discovering the version and source metadata of a package
#[cfg_attr(test, automock)]
pub trait VersionFinder: Send + Sync {
    /// Looks up `package_name` as installed for the running process
    ///
    /// # Returns
    /// * `Ok(FoundVersion)` - Git fields are empty when not installed from a checkout
    /// * `Err(FindError)` - If the package cannot be introspected
    fn find_version(&self, package_name: &str) -> Result<FoundVersion, FindError>;
}
