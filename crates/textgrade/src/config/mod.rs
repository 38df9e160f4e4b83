use crate::analysis::rubric::{Rubric, RubricError};
use crate::analysis::{MatchMode, TextAnalyzer};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Distinguishes runtime behavior for different stages of the service.
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
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("TEXTGRADE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("TEXTGRADE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("TEXTGRADE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("TEXTGRADE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let match_mode = match env::var("TEXTGRADE_MATCH_MODE") {
            Ok(raw) => raw
                .parse::<MatchMode>()
                .map_err(|_| ConfigError::InvalidMatchMode(raw))?,
            Err(_) => MatchMode::default(),
        };
        let rubric_path = env::var("TEXTGRADE_RUBRIC_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            analysis: AnalysisConfig {
                match_mode,
                rubric_path,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Rubric source and keyword counting mode for the analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub match_mode: MatchMode,
    pub rubric_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Loads and validates the rubric. A malformed rubric fails here, before any text is graded.
    pub fn build_analyzer(&self) -> Result<TextAnalyzer, RubricError> {
        let rubric = match &self.rubric_path {
            Some(path) => {
                let rubric = Rubric::from_path(path)?;
                info!(path = %path.display(), criteria = rubric.criterion_count(), "loaded custom rubric");
                rubric
            }
            None => Rubric::standard()?,
        };

        Ok(TextAnalyzer::new(rubric, self.match_mode))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMatchMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "TEXTGRADE_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "TEXTGRADE_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMatchMode(value) => write!(
                f,
                "TEXTGRADE_MATCH_MODE must be 'every' or 'first' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidMatchMode(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
