//! Configuration system for pareto.
//! TOML-based, layered resolution: CLI > env > file > defaults.

pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod pareto_config;
pub mod rpn_config;
pub mod similarity_config;
pub mod summary_config;

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use pareto_config::{CliOverrides, ParetoConfig};
pub use rpn_config::RpnConfig;
pub use similarity_config::SimilarityConfig;
pub use summary_config::SummaryConfig;
