// File: src/config.rs
use crate::core::lexicon::{DEFAULT_BREAKERS, DEFAULT_FALLBACK_COUNT, DEFAULT_SMOOTHING};
use crate::core::segmenter::Algorithm;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub experiment: ExperimentConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LexiconConfig {
    /// Epsilon in `ln(count + epsilon)`.
    pub smoothing: f64,
    /// Count assigned to resource words with no corpus evidence.
    pub fallback_count: f64,
    pub breakers: Vec<String>,
    pub sources: SourcesConfig,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            fallback_count: DEFAULT_FALLBACK_COUNT,
            breakers: DEFAULT_BREAKERS.iter().map(|s| s.to_string()).collect(),
            sources: SourcesConfig::default(),
        }
    }
}

/// External word lists. A source is used when its path is set.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SourcesConfig {
    /// VNDic-format dictionary (`##word`, `@@Proverb`).
    pub dictionary: Option<PathBuf>,
    /// Gazetteer, one location per line.
    pub locations: Option<PathBuf>,
    /// Gazetteer, one person name per line.
    pub person_names: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ExperimentConfig {
    pub data_dir: PathBuf,
    pub folds: usize,
    pub train_prefix: String,
    pub test_prefix: String,
    pub extension: String,
    pub algorithm: String,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            folds: 5,
            train_prefix: "train".to_string(),
            test_prefix: "test".to_string(),
            extension: "iob2".to_string(),
            algorithm: Algorithm::EnhancedMaximumMatching.selector().to_string(),
        }
    }
}

impl ExperimentConfig {
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        self.algorithm.parse()
    }

    /// Checks the fold count and the selector; returns the selected algorithm.
    pub fn validate(&self) -> Result<Algorithm, ConfigError> {
        if self.folds == 0 {
            return Err(ConfigError::NoFolds);
        }
        self.algorithm()
    }
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    // Surface bad experiment settings at load time rather than mid-experiment.
    config.experiment.validate()?;
    Ok(config)
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    log::info!("loaded configuration from {}", file_path.display());
    Ok(config)
}
