//! Fitted-model cache using moka.
//!
//! Keys are blake3 fingerprints of the keyword corpus and vocabulary cutoff.
//! Repeated ranking requests over an unchanged report set skip refitting.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use pareto_core::config::CacheConfig;

use super::TfIdfModel;

/// In-memory cache of fitted TF-IDF models.
pub struct TfIdfModelCache {
    cache: Cache<String, Arc<TfIdfModel>>,
}

impl TfIdfModelCache {
    pub fn new(max_models: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_models)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_models, Duration::from_secs(config.ttl_secs))
    }

    /// Return the cached model for this corpus, fitting and storing it on a miss.
    pub fn get_or_fit(&self, documents: &[Vec<String>], min_df: usize) -> Arc<TfIdfModel> {
        let key = corpus_fingerprint(documents, min_df);
        if let Some(model) = self.cache.get(&key) {
            tracing::debug!(key = %key, "tfidf model cache hit");
            return model;
        }
        let model = Arc::new(TfIdfModel::fit(documents, min_df));
        self.cache.insert(key, Arc::clone(&model));
        model
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

/// blake3 hex digest over every keyword list and the cutoff.
///
/// Lists are length-prefixed so `[["ab"], ["c"]]` and `[["a"], ["bc"]]` differ.
pub fn corpus_fingerprint(documents: &[Vec<String>], min_df: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(min_df as u64).to_le_bytes());
    hasher.update(&(documents.len() as u64).to_le_bytes());
    for keywords in documents {
        hasher.update(&(keywords.len() as u64).to_le_bytes());
        for word in keywords {
            hasher.update(&(word.len() as u64).to_le_bytes());
            hasher.update(word.as_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
