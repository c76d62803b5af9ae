use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Startup failure while wiring the tracing subscriber: either the
/// configured filter does not parse, or a subscriber is already installed.
#[derive(Debug)]
pub struct TelemetryError(String);

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TelemetryError {}

/// Installs the process-wide subscriber. `RUST_LOG` takes precedence over
/// the configured level so operators can raise verbosity per run.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|err| {
            TelemetryError(format!(
                "log filter '{}' did not parse: {err}",
                config.log_level
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|err| TelemetryError(format!("could not install tracing subscriber: {err}")))
}
