use pareto_core::models::SimilarityWeights;

/// The three raw similarity signals for one pair of reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilaritySignals {
    pub trigram: f64,
    pub lcs: f64,
    pub tfidf: f64,
}

impl SimilaritySignals {
    /// Hybrid score under a weight profile.
    pub fn combined(&self, weights: &SimilarityWeights) -> f64 {
        weights.combine(self.trigram, self.lcs, self.tfidf)
    }
}
