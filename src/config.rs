use crate::annotate::{OutputNaming, DEFAULT_GUTTER};
use crate::mapping::{DecodeRules, LineEncoding, LineField, DEFAULT_DELIMITER, DEFAULT_LINE_FIELD};
use crate::{AnnotateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".sourcemap-annotate.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DecodeConfig {
    /// Token delimiter
    #[serde(default)]
    pub delimiter: Option<char>,
    /// Index of the line value inside multi-value tokens
    #[serde(default)]
    pub field: Option<usize>,
    /// "absolute" or "delta"
    #[serde(default)]
    pub line_encoding: Option<LineEncoding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// "suffix" or "prefix"
    #[serde(default)]
    pub naming: Option<OutputNaming>,
    /// Spaces between the longest line and the PC comments
    #[serde(default)]
    pub gutter: Option<usize>,
    /// Only show the last PC of each line
    #[serde(default)]
    pub last_wins: Option<bool>,
}

impl DecodeConfig {
    pub fn rules(&self) -> DecodeRules {
        DecodeRules {
            delimiter: self.delimiter.unwrap_or(DEFAULT_DELIMITER),
            field: LineField::Index(self.field.unwrap_or(DEFAULT_LINE_FIELD)),
            line_encoding: self.line_encoding.unwrap_or_default(),
        }
    }
}

impl OutputConfig {
    pub fn gutter(&self) -> usize {
        self.gutter.unwrap_or(DEFAULT_GUTTER)
    }
}

impl Config {
    /// Load configuration from a file in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            AnnotateError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            AnnotateError::ConfigError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
            .into()
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load default config if file is missing or malformed
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Warning: Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }
}
