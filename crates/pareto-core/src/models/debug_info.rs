use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ClusterStats, SimilarityBreakdown};

/// Clustering stats plus pairwise similarity scores for the leading reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankingDebugInfo {
    pub stats: ClusterStats,
    pub similarity_pairs: Vec<SimilarityBreakdown>,
}
