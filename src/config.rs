use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub marketplace: MarketplaceSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceSettings {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub match_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_work_schedule_weight")]
    pub work_schedule: f64,
    #[serde(default = "default_language_weight")]
    pub language: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_area_weight")]
    pub area: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
    #[serde(default = "default_lease_terms_weight")]
    pub lease_terms: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            lifestyle: default_lifestyle_weight(),
            work_schedule: default_work_schedule_weight(),
            language: default_language_weight(),
            personality: default_personality_weight(),
            budget: default_budget_weight(),
            area: default_area_weight(),
            amenities: default_amenities_weight(),
            lease_terms: default_lease_terms_weight(),
        }
    }
}

fn default_lifestyle_weight() -> f64 { 15.0 }
fn default_work_schedule_weight() -> f64 { 10.0 }
fn default_language_weight() -> f64 { 10.0 }
fn default_personality_weight() -> f64 { 10.0 }
fn default_budget_weight() -> f64 { 15.0 }
fn default_area_weight() -> f64 { 10.0 }
fn default_amenities_weight() -> f64 { 20.0 }
fn default_lease_terms_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RENTORA_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RENTORA_)
            // e.g., RENTORA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RENTORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Substitute environment variables in string values
        // e.g., ${VAR_NAME} gets replaced with the value of VAR_NAME
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RENTORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Substitute environment variables in config values
///
/// Marketplace credentials commonly arrive through unprefixed variables in
/// deployment environments; both spellings are accepted.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let marketplace_base_url = env::var("MARKETPLACE_BASE_URL")
        .or_else(|_| env::var("RENTORA_MARKETPLACE__BASE_URL"))
        .ok();
    let marketplace_api_key = env::var("MARKETPLACE_API_KEY")
        .or_else(|_| env::var("RENTORA_MARKETPLACE__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(base_url) = marketplace_base_url {
        builder = builder.set_override("marketplace.base_url", base_url)?;
    }
    if let Some(api_key) = marketplace_api_key {
        builder = builder.set_override("marketplace.api_key", api_key)?;
    }

    builder.build()
}
