//! Log capture and a scripted version finder

use std::io::Write;
use std::sync::{Arc, Mutex};

use awslimitchecker::version::error::FindError;
use awslimitchecker::version::finder::{FoundVersion, VersionFinder};
use tracing::{debug, error, warn};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(String::from)
            .collect()
    }
}

pub struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

type FindResult = Result<FoundVersion, FindError>;

/// Finder that logs under the lookup targets and returns a scripted result
pub struct StubFinder {
    result: Box<dyn Fn() -> FindResult + Send + Sync>,
}

impl StubFinder {
    pub fn found(found: FoundVersion) -> Self {
        Self {
            result: Box::new(move || Ok(found.clone())),
        }
    }

    pub fn failing(make_error: fn() -> FindError) -> Self {
        Self {
            result: Box::new(move || Err(make_error())),
        }
    }
}

impl VersionFinder for StubFinder {
    fn find_version(&self, package_name: &str) -> FindResult {
        debug!(target: "versionfinder", "FINDER_DEBUG {}", package_name);
        debug!(target: "manifest", "MANIFEST_DEBUG");
        warn!(target: "git", "GIT_WARN");
        error!(target: "git", "GIT_ERROR");
        (self.result)()
    }
}
