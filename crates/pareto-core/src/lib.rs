//! # pareto-core
//!
//! Foundation crate for the pareto problem-ranking engine.
//! Defines the report and result types, config, errors, the report-source
//! trait, constants, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ParetoConfig;
pub use errors::{ParetoError, ParetoResult};
pub use models::{
    ClusterStats, RankedProblem, RankingDebugInfo, ReportFilters, ReportItem, ReportRecord,
    SimilarityBreakdown, SimilarityWeights, WordFrequency,
};
pub use traits::IReportSource;
