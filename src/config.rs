use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use crate::core::Matcher;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_good_match_threshold")]
    pub good_match_threshold: u8,
    /// TOML investor list; the built-in list is used when unset
    pub investors_path: Option<String>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            good_match_threshold: default_good_match_threshold(),
            investors_path: None,
        }
    }
}

fn default_top_n() -> usize { Matcher::DEFAULT_TOP_N }
fn default_good_match_threshold() -> u8 { Matcher::DEFAULT_GOOD_MATCH_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_asset_type_weight")]
    pub asset_type: f64,
    #[serde(default = "default_market_weight")]
    pub market: f64,
    #[serde(default = "default_investment_size_weight")]
    pub investment_size: f64,
    #[serde(default = "default_expected_return_weight")]
    pub expected_return: f64,
    #[serde(default = "default_risk_profile_weight")]
    pub risk_profile: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            asset_type: default_asset_type_weight(),
            market: default_market_weight(),
            investment_size: default_investment_size_weight(),
            expected_return: default_expected_return_weight(),
            risk_profile: default_risk_profile_weight(),
        }
    }
}

fn default_asset_type_weight() -> f64 { 30.0 }
fn default_market_weight() -> f64 { 25.0 }
fn default_investment_size_weight() -> f64 { 20.0 }
fn default_expected_return_weight() -> f64 { 15.0 }
fn default_risk_profile_weight() -> f64 { 10.0 }

/// Configured weights that cannot produce a 0-100 score
#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("Scoring weight '{0}' must be a non-negative number")]
    Negative(&'static str),

    #[error("Scoring weights must sum to 100, got {0}")]
    BadTotal(f64),
}

impl WeightsConfig {
    /// Check the weights and convert them for the matcher
    pub fn to_weights(&self) -> Result<ScoringWeights, WeightsError> {
        let named = [
            ("asset_type", self.asset_type),
            ("market", self.market),
            ("investment_size", self.investment_size),
            ("expected_return", self.expected_return),
            ("risk_profile", self.risk_profile),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::Negative(name));
            }
        }

        let weights = ScoringWeights {
            asset_type: self.asset_type,
            market: self.market,
            investment_size: self.investment_size,
            expected_return: self.expected_return,
            risk_profile: self.risk_profile,
        };

        let total = weights.total();
        if (total - 100.0).abs() > 1e-9 {
            return Err(WeightsError::BadTotal(total));
        }
        Ok(weights)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAPMATCH__)
    /// 5. `PORT` and `INVESTORS_FILE`
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAPMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional platform variables on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Ok(path) = env::var("INVESTORS_FILE") {
        builder = builder.set_override("matching.investors_path", path)?;
    }

    builder.build()
}
