use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SimilarityWeights;

/// Diagnostics describing one clustering run.
///
/// An empty corpus yields the all-zero default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterStats {
    pub total_items: usize,
    /// Terms with document frequency at or above the vocabulary cutoff.
    pub vocabulary_size: usize,
    pub cluster_count: usize,
    /// Highest-IDF vocabulary terms, most distinctive first.
    pub top_terms: Vec<String>,
    pub threshold: f64,
    /// Clustering-profile weights used for this run.
    pub weights: SimilarityWeights,
}

impl Default for ClusterStats {
    fn default() -> Self {
        Self {
            total_items: 0,
            vocabulary_size: 0,
            cluster_count: 0,
            top_terms: Vec::new(),
            threshold: 0.0,
            weights: SimilarityWeights::new(0.0, 0.0, 0.0),
        }
    }
}
