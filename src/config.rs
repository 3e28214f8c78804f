use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/programs.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub deductions: DeductionsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

/// Fixed deductions of the deductive scoring model
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionsConfig {
    #[serde(default = "default_hard_criterion")]
    pub hard_criterion: i32,
    #[serde(default = "default_dimension")]
    pub dimension: i32,
    #[serde(default = "default_missing_description")]
    pub missing_description: i32,
    #[serde(default = "default_missing_cost_plan")]
    pub missing_cost_plan: i32,
    #[serde(default = "default_missing_timeline")]
    pub missing_timeline: i32,
}

impl Default for DeductionsConfig {
    fn default() -> Self {
        Self {
            hard_criterion: default_hard_criterion(),
            dimension: default_dimension(),
            missing_description: default_missing_description(),
            missing_cost_plan: default_missing_cost_plan(),
            missing_timeline: default_missing_timeline(),
        }
    }
}

fn default_hard_criterion() -> i32 {
    100
}
fn default_dimension() -> i32 {
    30
}
fn default_missing_description() -> i32 {
    15
}
fn default_missing_cost_plan() -> i32 {
    10
}
fn default_missing_timeline() -> i32 {
    5
}

/// Score thresholds and brackets used by ranking and recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_strong_fit")]
    pub strong_fit: u8,
    #[serde(default = "default_draft")]
    pub draft: u8,
    #[serde(default = "default_co_financing")]
    pub co_financing_rate: u8,
    #[serde(default = "default_high_ceiling")]
    pub high_ceiling_amount: i64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            strong_fit: default_strong_fit(),
            draft: default_draft(),
            co_financing_rate: default_co_financing(),
            high_ceiling_amount: default_high_ceiling(),
        }
    }
}

fn default_min_score() -> u8 {
    40
}
fn default_strong_fit() -> u8 {
    80
}
fn default_draft() -> u8 {
    60
}
fn default_co_financing() -> u8 {
    80
}
fn default_high_ceiling() -> i64 {
    100_000
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
    /// 4. Environment variables (prefixed with FUNDARA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. FUNDARA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FUNDARA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FUNDARA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Assemble the engine's scoring configuration from the settings sections
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            hard_criterion_penalty: self.scoring.deductions.hard_criterion,
            dimension_penalty: self.scoring.deductions.dimension,
            missing_description_penalty: self.scoring.deductions.missing_description,
            missing_cost_plan_penalty: self.scoring.deductions.missing_cost_plan,
            missing_timeline_penalty: self.scoring.deductions.missing_timeline,
            min_score: self.scoring.thresholds.min_score,
            strong_fit_threshold: self.scoring.thresholds.strong_fit,
            draft_threshold: self.scoring.thresholds.draft,
            co_financing_threshold: self.scoring.thresholds.co_financing_rate,
            high_ceiling_amount: self.scoring.thresholds.high_ceiling_amount,
        }
    }
}
