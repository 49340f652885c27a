/// Pareto engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance used when checking that a weight profile sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Upper bound of the RPN scale.
pub const MAX_RPN: f64 = 100.0;

/// Upper bound of a single recency score.
pub const MAX_RECENCY_SCORE: f64 = 10.0;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "PARETO_LOG";
