use crate::config::TelemetryConfig;
use std::fmt;
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Where the active log filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Environment,
    Config,
}

impl FilterSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Environment => "RUST_LOG",
            Self::Config => "APP_LOG_LEVEL",
        }
    }
}

/// `RUST_LOG` wins when it parses; otherwise the configured level must.
pub(crate) fn resolve_filter(
    config: &TelemetryConfig,
) -> Result<(EnvFilter, FilterSource), TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok((filter, FilterSource::Environment));
    }

    EnvFilter::try_new(&config.log_level)
        .map(|filter| (filter, FilterSource::Config))
        .map_err(|source| TelemetryError::EnvFilter {
            value: config.log_level.clone(),
            source,
        })
}

/// Installs the global subscriber. Output goes to stderr so rendered
/// leaderboards on stdout stay machine-readable.
pub fn init(config: &TelemetryConfig) -> Result<FilterSource, TelemetryError> {
    let (env_filter, source) = resolve_filter(config)?;
    let directives = env_filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    debug!(source = source.label(), filter = %directives, "skillboard telemetry ready");
    Ok(source)
}
