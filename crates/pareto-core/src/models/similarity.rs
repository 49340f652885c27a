use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Weights applied to the three similarity signals.
///
/// A valid profile has every weight in [0.0, 1.0] and sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityWeights {
    /// Character-trigram Jaccard similarity.
    pub trigram: f64,
    /// Longest-common-substring ratio.
    pub lcs: f64,
    /// TF-IDF cosine similarity.
    pub tfidf: f64,
}

impl SimilarityWeights {
    /// Clustering profile: leans on TF-IDF so paraphrased reports merge.
    pub const CLUSTERING: Self = Self {
        trigram: 0.25,
        lcs: 0.15,
        tfidf: 0.60,
    };

    /// Centroid profile: leans further on surface text when picking the most
    /// typical member.
    pub const CENTROID: Self = Self {
        trigram: 0.30,
        lcs: 0.20,
        tfidf: 0.50,
    };

    pub const fn new(trigram: f64, lcs: f64, tfidf: f64) -> Self {
        Self {
            trigram,
            lcs,
            tfidf,
        }
    }

    /// Weighted sum of the three signals.
    pub fn combine(&self, trigram_sim: f64, lcs_sim: f64, tfidf_sim: f64) -> f64 {
        trigram_sim * self.trigram + lcs_sim * self.lcs + tfidf_sim * self.tfidf
    }

    pub fn sum(&self) -> f64 {
        self.trigram + self.lcs + self.tfidf
    }
}

/// Per-pair similarity breakdown, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityBreakdown {
    pub first_id: String,
    /// First report text, truncated for display.
    pub first_text: String,
    pub second_id: String,
    pub second_text: String,
    pub trigram_similarity: f64,
    pub lcs_similarity: f64,
    pub tfidf_similarity: f64,
    /// Clustering-profile hybrid score.
    pub combined_similarity: f64,
}
