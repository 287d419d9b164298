//! Process-wide logging: a rotating file sink plus an optional console echo.

mod rotating;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub use rotating::RotatingFile;

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "hermes.log";

/// Size at which the log file rolls over.
pub const MAX_LOG_BYTES: u64 = 10_000_000;

/// Number of rolled-over files kept.
pub const LOG_BACKUPS: usize = 5;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "hermes=debug";

/// Builds the subscriber: every event passing `filter` goes to `file`, and
/// to `console` as well when one is given.
pub fn subscriber<F, C>(
    file: F,
    console: Option<C>,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static
where
    F: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_layer = fmt::layer().with_writer(file).with_ansi(false);

    let console_layer = console.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
}

/// Installs the global subscriber writing to `log_file`, echoing to stdout
/// when `verbose` is set.
pub fn init(log_file: &Path, verbose: bool) -> Result<()> {
    let file = RotatingFile::open(log_file, MAX_LOG_BYTES, LOG_BACKUPS)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let console = verbose.then_some(std::io::stdout);

    subscriber(Mutex::new(file), console, filter)
        .try_init()
        .context("Failed to install the logger")?;

    Ok(())
}
