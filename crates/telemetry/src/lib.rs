//! Tracing/logging bootstrap for Folio.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use folio_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing pipeline according to telemetry settings.
///
/// Honors `RUST_LOG` when set, defaulting to `info` otherwise. Safe to call
/// only once per process.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?,
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?,
    }

    tracing::debug!(target: "folio-telemetry", format = ?settings.log_format, "telemetry initialized");
    Ok(())
}
