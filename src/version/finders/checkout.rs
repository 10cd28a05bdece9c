//! Finder for packages built from a local source tree

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::default_source_dir;
use crate::version::error::FindError;
use crate::version::finder::{FoundVersion, VersionFinder};
use crate::version::{git, manifest};

const TARGET: &str = "versionfinder";

/// Looks up a package in a source directory
///
/// The manifest supplies the release. When the directory is a git work tree,
/// commit, exact tag, dirty state and origin URL come from git; otherwise the
/// package is treated as a plain install and only the manifest data is used.
pub struct CheckoutVersionFinder {
    source_dir: PathBuf,
}

impl CheckoutVersionFinder {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl Default for CheckoutVersionFinder {
    fn default() -> Self {
        Self::new(default_source_dir())
    }
}

impl VersionFinder for CheckoutVersionFinder {
    fn find_version(&self, package_name: &str) -> Result<FoundVersion, FindError> {
        debug!(
            target: TARGET,
            "Looking up {} in {}",
            package_name,
            self.source_dir.display()
        );

        let package = manifest::read_package(&self.source_dir, package_name)?;

        if !git::is_work_tree(&self.source_dir)? {
            debug!(target: TARGET, "{} is not a git checkout", self.source_dir.display());
            let url = package.repository.ok_or_else(|| FindError::MissingUrl {
                package: package_name.to_string(),
            })?;
            return Ok(FoundVersion {
                version: package.version,
                url,
                git_is_dirty: false,
                git_tag: None,
                git_commit: None,
            });
        }

        let state = git::checkout_state(&self.source_dir)?;
        let url = state
            .remote_url
            .or(package.repository)
            .ok_or_else(|| FindError::MissingUrl {
                package: package_name.to_string(),
            })?;

        debug!(
            target: TARGET,
            "Found {} {} at {} (tag={:?}, dirty={})",
            package_name,
            package.version,
            state.commit,
            state.tag,
            state.is_dirty
        );

        Ok(FoundVersion {
            version: package.version,
            url,
            git_is_dirty: state.is_dirty,
            git_tag: state.tag,
            git_commit: Some(state.commit),
        })
    }
}
