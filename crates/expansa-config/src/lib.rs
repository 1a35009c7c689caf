//! Configuration loading for Expansa.
//! Reads expansa.toml from the current directory or the path in EXPANSA_CONFIG.
//! Every field has a default, so running without a file is fine.

use expansa_common::{ExpansaError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the values were read from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8501 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ExpansaError::Config(format!("invalid server address {}:{}: {e}", self.host, self.port)))
    }
}

/// Score thresholds behind the tier assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_tier1_min")]
    pub tier1_min: f64,
    #[serde(default = "default_tier2_min")]
    pub tier2_min: f64,
}

fn default_tier1_min() -> f64 { 7.5 }
fn default_tier2_min() -> f64 { 5.0 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { tier1_min: default_tier1_min(), tier2_min: default_tier2_min() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; RUST_LOG wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "expansa=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

mod tests;

impl Config {
    /// Load configuration from expansa.toml.
    /// Checks EXPANSA_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("EXPANSA_CONFIG")
            .unwrap_or_else(|_| "expansa.toml".to_string());
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ExpansaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        if !s.tier1_min.is_finite() || !s.tier2_min.is_finite() {
            return Err(ExpansaError::Config("tier thresholds must be finite".into()));
        }
        if s.tier1_min <= s.tier2_min {
            return Err(ExpansaError::Config(format!(
                "tier1_min ({}) must be greater than tier2_min ({})",
                s.tier1_min, s.tier2_min
            )));
        }
        self.server.bind_addr()?;
        Ok(())
    }
}
