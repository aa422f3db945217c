use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub roster: RosterConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("APP_ROSTER_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let default_category =
            env::var("APP_DEFAULT_CATEGORY").unwrap_or_else(|_| "all".to_string());
        if default_category.trim().is_empty() {
            return Err(ConfigError::BlankCategory);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            roster: RosterConfig {
                path,
                default_category: default_category.trim().to_string(),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the roster snapshot comes from and which category is shown first.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// JSON roster on disk; the bundled sample roster is used when unset.
    pub path: Option<PathBuf>,
    pub default_category: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    BlankCategory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankCategory => {
                write!(f, "APP_DEFAULT_CATEGORY must be 'all' or a category name")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
