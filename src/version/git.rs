//! Git working tree inspection through the `git` executable

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::version::error::FindError;

const TARGET: &str = "git";
const GIT: &str = "git";

/// Git state of a checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutState {
    pub commit: String,
    pub tag: Option<String>,
    pub is_dirty: bool,
    pub remote_url: Option<String>,
}

fn run(dir: &Path, args: &[&str]) -> Result<Output, FindError> {
    debug!(target: TARGET, "Running git {} in {}", args.join(" "), dir.display());

    Command::new(GIT)
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => FindError::Unavailable {
                tool: GIT.to_string(),
            },
            _ => FindError::Io(e),
        })
}

/// Runs git and returns trimmed stdout, failing on a non-zero exit.
fn run_checked(dir: &Path, args: &[&str]) -> Result<String, FindError> {
    let output = run(dir, args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(target: TARGET, "git {} failed: {}", args.join(" "), stderr);
        return Err(FindError::CommandFailed {
            command: format!("{GIT} {}", args.join(" ")),
            status: output.status.code().unwrap_or(-1),
            stderr,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Runs git and returns trimmed stdout, or `None` on a non-zero exit or empty output.
fn run_optional(dir: &Path, args: &[&str]) -> Result<Option<String>, FindError> {
    let output = run(dir, args)?;
    if !output.status.success() {
        return Ok(None);
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(Some(stdout).filter(|s| !s.is_empty()))
}

/// Whether `dir` lies inside a git work tree.
pub fn is_work_tree(dir: &Path) -> Result<bool, FindError> {
    let inside = run_optional(dir, &["rev-parse", "--is-inside-work-tree"])?;
    Ok(inside.as_deref() == Some("true"))
}

/// Reads commit, exact tag, dirty state and origin URL of the checkout at `dir`.
pub fn checkout_state(dir: &Path) -> Result<CheckoutState, FindError> {
    let commit = run_checked(dir, &["rev-parse", "HEAD"])?;
    let tag = run_optional(dir, &["describe", "--tags", "--exact-match", "HEAD"])?;
    let status = run_checked(dir, &["status", "--porcelain", "--untracked-files=no"])?;
    let remote_url = run_optional(dir, &["remote", "get-url", "origin"])?;

    let state = CheckoutState {
        commit,
        tag,
        is_dirty: !status.is_empty(),
        remote_url,
    };
    debug!(target: TARGET, "Checkout state: {:?}", state);
    Ok(state)
}
