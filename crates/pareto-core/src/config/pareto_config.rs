//! Top-level pareto configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CacheConfig, ObservabilityConfig, RpnConfig, SimilarityConfig, SummaryConfig};
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::models::SimilarityWeights;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`PARETO_*`)
/// 3. Config file (TOML)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParetoConfig {
    pub similarity: SimilarityConfig,
    pub rpn: RpnConfig,
    pub summary: SummaryConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub clustering_threshold: Option<f64>,
    pub recency_window_days: Option<u32>,
    pub key_phrase_words: Option<usize>,
    pub log_level: Option<String>,
}

impl ParetoConfig {
    /// Load configuration with layered resolution, then validate it.
    ///
    /// A missing `path` means "defaults + env + CLI only". A path that is
    /// given but cannot be read is an error.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ParetoConfig) -> Result<(), ConfigError> {
        let sim = &config.similarity;
        if !(0.0..=1.0).contains(&sim.clustering_threshold) {
            return Err(invalid(
                "similarity.clustering_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        validate_weights("similarity.clustering_weights", &sim.clustering_weights)?;
        validate_weights("similarity.centroid_weights", &sim.centroid_weights)?;
        if sim.min_document_frequency == 0 {
            return Err(invalid("similarity.min_document_frequency", "must be at least 1"));
        }

        let rpn = &config.rpn;
        if rpn.frequency_weight < 0.0 || !rpn.frequency_weight.is_finite() {
            return Err(invalid("rpn.frequency_weight", "must be a non-negative number"));
        }
        if rpn.recency_weight < 0.0 || !rpn.recency_weight.is_finite() {
            return Err(invalid("rpn.recency_weight", "must be a non-negative number"));
        }
        if rpn.recency_window_days == 0 {
            return Err(invalid("rpn.recency_window_days", "must be greater than 0"));
        }
        if !(0.0..=10.0).contains(&rpn.neutral_recency) {
            return Err(invalid("rpn.neutral_recency", "must be between 0.0 and 10.0"));
        }

        let summary = &config.summary;
        for (field, value) in [
            ("summary.key_phrase_words", summary.key_phrase_words),
            ("summary.sample_ids", summary.sample_ids),
            ("summary.word_cloud_limit", summary.word_cloud_limit),
            ("summary.default_rank_limit", summary.default_rank_limit),
            ("summary.debug_text_chars", summary.debug_text_chars),
        ] {
            if value == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }

        if config.cache.enabled && config.cache.max_models == 0 {
            return Err(invalid("cache.max_models", "must be greater than 0 when enabled"));
        }

        match config.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(invalid(
                    "observability.log_level",
                    &format!("unknown level '{other}'"),
                ))
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `PARETO_CLUSTERING_THRESHOLD`, `PARETO_RECENCY_WINDOW_DAYS`, etc.
    fn apply_env_overrides(config: &mut ParetoConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(config: &mut ParetoConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PARETO_CLUSTERING_THRESHOLD").and_then(|v| v.parse().ok()) {
            config.similarity.clustering_threshold = v;
        }
        if let Some(v) = lookup("PARETO_RECENCY_WINDOW_DAYS").and_then(|v| v.parse().ok()) {
            config.rpn.recency_window_days = v;
        }
        if let Some(v) = lookup("PARETO_KEY_PHRASE_WORDS").and_then(|v| v.parse().ok()) {
            config.summary.key_phrase_words = v;
        }
        if let Some(v) = lookup("PARETO_CACHE_ENABLED").and_then(|v| v.parse().ok()) {
            config.cache.enabled = v;
        }
        if let Some(v) = lookup("PARETO_LOG_LEVEL") {
            config.observability.log_level = v.to_lowercase();
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut ParetoConfig, cli: &CliOverrides) {
        if let Some(v) = cli.clustering_threshold {
            config.similarity.clustering_threshold = v;
        }
        if let Some(v) = cli.recency_window_days {
            config.rpn.recency_window_days = v;
        }
        if let Some(v) = cli.key_phrase_words {
            config.summary.key_phrase_words = v;
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.to_lowercase();
        }
    }
}

fn validate_weights(field: &str, weights: &SimilarityWeights) -> Result<(), ConfigError> {
    for (name, value) in [
        ("trigram", weights.trigram),
        ("lcs", weights.lcs),
        ("tfidf", weights.tfidf),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(
                &format!("{field}.{name}"),
                "must be between 0.0 and 1.0",
            ));
        }
    }
    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(invalid(field, &format!("weights must sum to 1.0, got {sum:.6}")));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
