//! Version resolution with static fallback
//!
//! Resolution never fails. A lookup error is logged and the hard-coded
//! release is returned instead, so reporting a version can never stop the
//! tool from starting.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::error;

use crate::config::{PACKAGE_NAME, PROJECT_URL, VERSION};
use crate::version::finder::{FoundVersion, VersionFinder};
use crate::version::finders::CheckoutVersionFinder;
use crate::version::info::VersionInfo;

/// Commits longer than this are shortened
const SHORT_COMMIT_THRESHOLD: usize = 7;
const SHORT_COMMIT_LEN: usize = 8;
const DIRTY_MARKER: &str = "*";

/// Resolves the running version through a [`VersionFinder`]
pub struct VersionResolver<F: VersionFinder> {
    finder: F,
    package_name: String,
    unavailable_reported: AtomicBool,
}

impl VersionResolver<CheckoutVersionFinder> {
    /// Resolver over the source tree this crate was built from.
    pub fn from_build_tree() -> Self {
        Self::new(CheckoutVersionFinder::default())
    }
}

impl<F: VersionFinder> VersionResolver<F> {
    pub fn new(finder: F) -> Self {
        Self::for_package(finder, PACKAGE_NAME)
    }

    pub fn for_package(finder: F, package_name: impl Into<String>) -> Self {
        Self {
            finder,
            package_name: package_name.into(),
            unavailable_reported: AtomicBool::new(false),
        }
    }

    /// Looks up the installed version, falling back to the hard-coded release.
    pub fn resolve(&self) -> VersionInfo {
        match self.finder.find_version(&self.package_name) {
            Ok(found) => enrich(found),
            Err(e) => {
                if e.is_unavailable() && !self.unavailable_reported.swap(true, Ordering::Relaxed) {
                    error!("Unable to load version finder: {}", e);
                }
                error!(
                    error = ?e,
                    "Error checking installed version; this installation may not be in \
                     compliance with the AGPLv3 license"
                );
                fallback()
            }
        }
    }
}

/// The hard-coded release with no checkout metadata.
pub fn fallback() -> VersionInfo {
    VersionInfo::new(VERSION.as_str(), PROJECT_URL)
}

/// Builds the version from finder output, marking dirty trees and shortening the commit.
pub fn enrich(found: FoundVersion) -> VersionInfo {
    let dirty = if found.git_is_dirty { DIRTY_MARKER } else { "" };

    let tag = found.git_tag.map(|tag| format!("{tag}{dirty}"));
    let commit = found.git_commit.map(|commit| {
        let short = if commit.chars().count() > SHORT_COMMIT_THRESHOLD {
            commit.chars().take(SHORT_COMMIT_LEN).collect()
        } else {
            commit
        };
        format!("{short}{dirty}")
    });

    VersionInfo::with_checkout(found.version, found.url, commit, tag)
}
