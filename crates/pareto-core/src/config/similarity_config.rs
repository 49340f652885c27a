use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SimilarityWeights;

/// Similarity and clustering configuration.
///
/// The threshold and both weight profiles have no derivation beyond
/// empirical tuning, so they are exposed here instead of hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Minimum clustering-profile score for a report to join a founder.
    pub clustering_threshold: f64,
    /// Minimum number of documents a keyword must appear in to enter the
    /// TF-IDF vocabulary.
    pub min_document_frequency: usize,
    pub clustering_weights: SimilarityWeights,
    pub centroid_weights: SimilarityWeights,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            clustering_threshold: defaults::DEFAULT_CLUSTERING_THRESHOLD,
            min_document_frequency: defaults::DEFAULT_MIN_DOCUMENT_FREQUENCY,
            clustering_weights: defaults::DEFAULT_CLUSTERING_WEIGHTS,
            centroid_weights: defaults::DEFAULT_CENTROID_WEIGHTS,
        }
    }
}
