use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;
use crate::models::ScoringWeights;

/// Upper bound for any single weight; keeps every total well inside `u32`
pub const MAX_WEIGHT: u32 = 100_000;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Applied to match requests that carry no limit of their own
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_university_weight")]
    pub university: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_industry_weight")]
    pub industry: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_degree_weight")]
    pub degree: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_skill_weight")]
    pub skill: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_interest_weight")]
    pub interest: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_mentoring_weight")]
    pub mentoring: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_company_weight")]
    pub company: u32,
    #[validate(range(max = MAX_WEIGHT))]
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            university: default_university_weight(),
            industry: default_industry_weight(),
            degree: default_degree_weight(),
            skill: default_skill_weight(),
            interest: default_interest_weight(),
            mentoring: default_mentoring_weight(),
            company: default_company_weight(),
            availability: default_availability_weight(),
        }
    }
}

fn default_university_weight() -> u32 {
    200
}

fn default_industry_weight() -> u32 {
    160
}

fn default_degree_weight() -> u32 {
    100
}

fn default_skill_weight() -> u32 {
    90
}

fn default_interest_weight() -> u32 {
    70
}

fn default_mentoring_weight() -> u32 {
    50
}

fn default_company_weight() -> u32 {
    50
}

fn default_availability_weight() -> u32 {
    50
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            university: config.university,
            industry: config.industry,
            degree: config.degree,
            skill: config.skill,
            interest: config.interest,
            mentoring: config.mentoring,
            company: config.company,
            availability: config.availability,
        }
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

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GBHM__)
    /// 5. Plain HOST, PORT and LOG_LEVEL variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GBHM__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_plain_env_overrides(settings)?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid scoring weights: {}", e)))?;
        Ok(self)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GBHM")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honor the conventional deployment variables on top of the layered config
fn apply_plain_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT '{}': {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }

    builder.build()
}
