//! Tracing subscriber setup
//!
//! The version finder, the manifest reader and git log under their own
//! targets. Unless debugging is requested, records from exactly those
//! targets are dropped below `error` so a best-effort lookup does not flood
//! the output. Records that pass the cap still reach the same subscriber as
//! everything else, and other targets (`github_client`, `gitlab`, ...) are
//! never capped.

use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{DEFAULT_LOG_FILTER, SUPPRESSED_TARGETS, VersionCheckConfig};

/// Whether a record at `level` from `target` is dropped by suppression.
///
/// Only exact matches on the lookup targets are capped, and never when
/// `debug` is set.
pub fn suppresses(debug: bool, target: &str, level: &Level) -> bool {
    !debug && *level != Level::ERROR && SUPPRESSED_TARGETS.contains(&target)
}

/// Builds the base filter from the configured directive.
pub fn build_filter(config: &VersionCheckConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}' ({}), using '{}'",
            config.log_filter, e, DEFAULT_LOG_FILTER
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Builds a subscriber writing plain text to `writer`, with suppression applied.
pub fn subscriber<W>(
    config: &VersionCheckConfig,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let debug = config.debug;
    tracing_subscriber::registry().with(build_filter(config)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter_fn(move |meta| {
                !suppresses(debug, meta.target(), meta.level())
            })),
    )
}

/// Installs the stderr subscriber. Call once at startup, before resolving.
///
/// A subscriber installed earlier by the host process is left in place.
pub fn init(config: &VersionCheckConfig) {
    let _ = subscriber(config, std::io::stderr).try_init();
}
