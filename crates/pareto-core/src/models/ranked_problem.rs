use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One ranked problem cluster, as returned to the serving layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedProblem {
    /// 1-based position after sorting by RPN.
    pub rank: usize,
    /// Short key phrase summarising the cluster.
    pub description: String,
    /// Number of reports in the cluster.
    pub frequency: usize,
    /// Risk Priority Number in [0, 100].
    pub rpn_score: f64,
    /// Most frequent category among members, first-seen on ties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
    /// Up to five member ids in cluster order.
    pub sample_ids: Vec<String>,
    /// Id of the centroid member.
    pub representative_id: String,
    /// Full text of the centroid member.
    pub representative: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub algorithm_info: String,
}
