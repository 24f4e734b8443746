//! Configuration management for VCA Paspoort
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with VCA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::SystemClock;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Roster seed configuration
    pub roster: RosterConfig,

    /// Reporting configuration
    pub reporting: ReportingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    /// JSON file holding the employee roster
    pub seed_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportingConfig {
    /// Fixed offset from UTC, in minutes, that defines "today"
    pub utc_offset_minutes: i32,

    /// Employer name shown on the dashboard
    pub company_name: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("VCA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("roster.seed_path", "backend/seed/roster.json")?
            .set_default("reporting.utc_offset_minutes", 60)?
            .set_default("reporting.company_name", "Bouwbedrijf Janssen B.V.")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (VCA_ prefix)
            .add_source(
                Environment::with_prefix("VCA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ReportingConfig {
    /// Clock reading the wall time in the configured reporting offset
    pub fn clock(&self) -> Result<SystemClock, AppError> {
        SystemClock::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            AppError::Configuration(format!(
                "reporting.utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed_path: "backend/seed/roster.json".to_string(),
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 60,
            company_name: "Bouwbedrijf Janssen B.V.".to_string(),
        }
    }
}
