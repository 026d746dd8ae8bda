use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::{BrandGuidelines, ScoringWeights};
use crate::markup::FormattingOptions;
use crate::semantic::SemanticWeights;

/// Application configuration module
/// This module handles loading, validating and saving the policy used by the
/// content validator, the semantic validator and the pretty printer.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Content validation policy
    #[serde(default)]
    pub content: ContentConfig,

    /// Semantic validation policy
    #[serde(default)]
    pub semantic: SemanticConfig,

    /// Markup formatting options
    #[serde(default)]
    pub formatting: FormattingOptions,
}

/// Content validation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ContentConfig {
    // @field: Brand vocabulary
    #[serde(default)]
    pub guidelines: BrandGuidelines,

    // @field: Penalties and thresholds
    #[serde(default)]
    pub weights: ScoringWeights,
}

/// Semantic validation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SemanticConfig {
    // @field: Penalties and thresholds
    #[serde(default)]
    pub weights: SemanticWeights,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&json).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Load `path`, or create it with defaults when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("Config file not found at {:?}, creating default config.", path);
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let formatting = &self.formatting;
        if formatting.indent_size == 0 {
            return Err(anyhow!("Formatting indent_size must be greater than zero"));
        }
        if formatting.max_line_length == 0 {
            return Err(anyhow!("Formatting max_line_length must be greater than zero"));
        }
        if !formatting.indent_char.is_whitespace() {
            return Err(anyhow!(
                "Formatting indent_char must be whitespace, got {:?}",
                formatting.indent_char
            ));
        }

        let invalid: Vec<&str> = self
            .content
            .weights
            .invalid_fields()
            .into_iter()
            .chain(self.semantic.weights.invalid_fields())
            .collect();
        if !invalid.is_empty() {
            return Err(anyhow!("Weights must be non-negative numbers: {}", invalid.join(", ")));
        }
        // Content scoring below 60 must always come with suggestions
        let threshold = self.content.weights.suggestion_score_threshold;
        if threshold < 60.0 {
            return Err(anyhow!(
                "Content suggestion_score_threshold must be at least 60, got {}",
                threshold
            ));
        }

        let guidelines = &self.content.guidelines;
        let conflicts = guidelines.conflicting_terms();
        if !conflicts.is_empty() {
            return Err(anyhow!(
                "Terms cannot be both forbidden and approved: {}",
                conflicts.join(", ")
            ));
        }
        if guidelines.forbidden_terms.iter().any(|term| term.trim().is_empty()) {
            return Err(anyhow!("Forbidden terms cannot be empty"));
        }

        Ok(())
    }
}
