use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::scoring::{
    FORMAT_WEIGHT, INTEREST_WEIGHT, RATING_WEIGHT, RECENCY_WEIGHT, SKILL_LEVEL_WEIGHT,
};
use crate::models::MatchingWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub marketplace: MarketplaceSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceSettings {
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    #[serde(default = "default_signup_credits")]
    pub signup_credits: u32,
    #[serde(default = "default_skill_rating")]
    pub default_skill_rating: f64,
    /// Artificial delay applied after a swap, in milliseconds
    #[serde(default = "default_swap_latency_ms")]
    pub swap_latency_ms: u64,
}

impl Default for MarketplaceSettings {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
            signup_credits: default_signup_credits(),
            default_skill_rating: default_skill_rating(),
            swap_latency_ms: default_swap_latency_ms(),
        }
    }
}

fn default_email_domain() -> String { "@university.edu".to_string() }
fn default_signup_credits() -> u32 { 10 }
fn default_skill_rating() -> f64 { 4.5 }
fn default_swap_latency_ms() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    #[serde(default = "default_max_recommendation_limit")]
    pub max_recommendation_limit: usize,
    /// Artificial delay applied before recommendations are returned
    #[serde(default = "default_recommendation_latency_ms")]
    pub recommendation_latency_ms: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            recommendation_limit: default_recommendation_limit(),
            max_recommendation_limit: default_max_recommendation_limit(),
            recommendation_latency_ms: default_recommendation_latency_ms(),
        }
    }
}

fn default_recommendation_limit() -> usize { 6 }
fn default_max_recommendation_limit() -> usize { 50 }
fn default_recommendation_latency_ms() -> u64 { 1500 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
    #[serde(default = "default_skill_level_weight")]
    pub skill_level: f64,
    #[serde(default = "default_format_weight")]
    pub format: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_recency_weight")]
    pub recency: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interest: default_interest_weight(),
            skill_level: default_skill_level_weight(),
            format: default_format_weight(),
            rating: default_rating_weight(),
            recency: default_recency_weight(),
        }
    }
}

impl From<&WeightsConfig> for MatchingWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            interest: config.interest,
            skill_level: config.skill_level,
            format: config.format,
            rating: config.rating,
            recency: config.recency,
        }
    }
}

fn default_interest_weight() -> f64 { INTEREST_WEIGHT }
fn default_skill_level_weight() -> f64 { SKILL_LEVEL_WEIGHT }
fn default_format_weight() -> f64 { FORMAT_WEIGHT }
fn default_rating_weight() -> f64 { RATING_WEIGHT }
fn default_recency_weight() -> f64 { RECENCY_WEIGHT }

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
    /// 4. Environment variables (prefixed with SKILLSWAP__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLSWAP__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SKILLSWAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
