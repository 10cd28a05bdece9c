//! Cargo manifest reader for installed package metadata

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::version::error::FindError;

const TARGET: &str = "manifest";

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
    version: Option<String>,
    repository: Option<String>,
}

/// Package metadata read from a `Cargo.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub repository: Option<String>,
}

/// Path of the manifest inside `dir`.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join("Cargo.toml")
}

/// Reads the manifest in `dir` and checks that it describes `package_name`.
pub fn read_package(dir: &Path, package_name: &str) -> Result<PackageMetadata, FindError> {
    let path = manifest_path(dir);
    debug!(target: TARGET, "Reading manifest {}", path.display());

    if !path.is_file() {
        return Err(FindError::PackageNotFound {
            package: package_name.to_string(),
            manifest: path,
        });
    }

    let content = std::fs::read_to_string(&path)?;
    parse_package(&content, package_name, &path)
}

fn parse_package(
    content: &str,
    package_name: &str,
    path: &Path,
) -> Result<PackageMetadata, FindError> {
    let manifest: CargoManifest = toml::from_str(content)?;

    let package = manifest.package.ok_or_else(|| {
        FindError::Manifest(format!("{} has no [package] table", path.display()))
    })?;

    if package.name != package_name {
        debug!(
            target: TARGET,
            "Manifest {} describes {}, not {}",
            path.display(),
            package.name,
            package_name
        );
        return Err(FindError::PackageNotFound {
            package: package_name.to_string(),
            manifest: path.to_path_buf(),
        });
    }

    let version = package.version.ok_or_else(|| {
        FindError::Manifest(format!("{} has no literal package version", path.display()))
    })?;
    semver::Version::parse(&version)?;

    debug!(target: TARGET, "Found {} {}", package.name, version);

    Ok(PackageMetadata {
        name: package.name,
        version,
        repository: package.repository.filter(|url| !url.is_empty()),
    })
}
