//! Data types flowing into and out of the ranking engine.

pub mod cluster_stats;
pub mod debug_info;
pub mod filters;
pub mod ranked_problem;
pub mod report;
pub mod similarity;
pub mod word_frequency;

pub use cluster_stats::ClusterStats;
pub use debug_info::RankingDebugInfo;
pub use filters::ReportFilters;
pub use ranked_problem::RankedProblem;
pub use report::{ReportItem, ReportRecord};
pub use similarity::{SimilarityBreakdown, SimilarityWeights};
pub use word_frequency::WordFrequency;
