use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::{CompetitionFormat, CompetitionRules};
use crate::season::SeasonConfig;

/// Environment variable naming the engine config file.
pub const CONFIG_PATH_ENV: &str = "FAIRWAY_CONFIG";
/// Path used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/fairway.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(m) => write!(f, "failed to read config: {m}"),
            Self::Parse(m) => write!(f, "failed to parse config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Default competition and season settings, loaded from `fairway.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: CompetitionRules,
    pub season: SeasonConfig,
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            tracing::info!("No {path} found, using default engine config");
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(cfg) => {
                tracing::info!("Loaded engine configuration from {path}");
                cfg
            },
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            },
        }
    }

    /// Check for settings that are accepted but probably wrong. Each problem is
    /// logged and returned; nothing here rejects the config.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let rules = &self.rules;

        if !(0.0..=1.0).contains(&rules.handicap_allowance) {
            warnings.push(format!(
                "rules.handicap_allowance {} is outside 0..=1",
                rules.handicap_allowance
            ));
        }
        if rules.handicap_cap <= 0.0 {
            warnings.push(format!(
                "rules.handicap_cap {} caps every player at scratch or better",
                rules.handicap_cap
            ));
        }
        if rules.max_score_config.is_some() && rules.format != CompetitionFormat::MaxScore {
            warnings.push(format!(
                "rules.max_score_config is ignored for format {}",
                rules.format
            ));
        }
        if rules.format == CompetitionFormat::MaxScore && rules.max_score_config.is_none() {
            warnings.push("maxScore format without max_score_config leaves scores uncapped".into());
        }
        if self.season.best_n == 0 {
            warnings.push("season.best_n is 0, only participation points will count".into());
        }

        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        warnings
    }
}
