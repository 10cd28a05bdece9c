//! Resolved version value

use std::fmt;

use serde::Serialize;

/// A resolved awslimitchecker version
///
/// `tag` and `commit` are only set when the running build came from a git
/// checkout. When both are set, only the tag is displayed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub release: String,
    pub url: String,
    pub tag: Option<String>,
    pub commit: Option<String>,
}

impl VersionInfo {
    /// Release and URL only, with no checkout metadata.
    pub fn new(release: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            url: url.into(),
            tag: None,
            commit: None,
        }
    }

    pub fn with_checkout(
        release: impl Into<String>,
        url: impl Into<String>,
        commit: Option<String>,
        tag: Option<String>,
    ) -> Self {
        Self {
            release: release.into(),
            url: url.into(),
            tag,
            commit,
        }
    }

    /// Release with the tag, or failing that the commit, appended after `@`.
    pub fn version_str(&self) -> String {
        match (&self.tag, &self.commit) {
            (Some(tag), _) => format!("{}@{}", self.release, tag),
            (None, Some(commit)) => format!("{}@{}", self.release, commit),
            (None, None) => self.release.clone(),
        }
    }

    /// Human-readable form, `version_str <url>`.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Diagnostic form naming every field.
    pub fn debug_repr(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.version_str(), self.url)
    }
}

impl fmt::Debug for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VersionInfo({:?}, {:?}, tag={:?}, commit={:?})",
            self.release, self.url, self.tag, self.commit
        )
    }
}
