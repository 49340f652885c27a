use serde::{Deserialize, Serialize};

use super::defaults;

/// TF-IDF model cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Reuse fitted models across requests over an identical corpus.
    pub enabled: bool,
    pub max_models: u64,
    /// Maximum lifetime of a cached model in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            max_models: defaults::DEFAULT_CACHE_MAX_MODELS,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
