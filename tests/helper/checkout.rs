//! Source tree fixtures backed by a temporary directory

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns true when a `git` executable can be run.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A package source tree, optionally turned into a git checkout
pub struct TestCheckout {
    dir: TempDir,
}

impl TestCheckout {
    /// Creates a tree with a manifest for `name` at `version`.
    pub fn new(name: &str, version: &str, repository: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let mut manifest = format!("[package]\nname = \"{name}\"\nversion = \"{version}\"\n");
        if let Some(repository) = repository {
            manifest.push_str(&format!("repository = \"{repository}\"\n"));
        }
        std::fs::write(dir.path().join("Cargo.toml"), manifest).unwrap();
        std::fs::write(dir.path().join("README.md"), "readme\n").unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Initializes a repository and commits the tree.
    pub fn init_git(self) -> Self {
        self.git(&["init", "-q"]);
        self.git(&["add", "."]);
        self.git(&["commit", "-q", "-m", "initial"]);
        self
    }

    pub fn with_tag(self, tag: &str) -> Self {
        self.git(&["tag", tag]);
        self
    }

    pub fn with_origin(self, url: &str) -> Self {
        self.git(&["remote", "add", "origin", url]);
        self
    }

    /// Modifies a tracked file without committing.
    pub fn make_dirty(self) -> Self {
        std::fs::write(self.path().join("README.md"), "changed\n").unwrap();
        self
    }

    /// Full hash of HEAD.
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
                "-c",
                "init.defaultBranch=main",
            ])
            .args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
