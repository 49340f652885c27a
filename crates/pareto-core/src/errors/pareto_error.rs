use super::{ConfigError, SourceError};

/// Top-level error for the service boundary.
/// Aggregates subsystem errors via `From` conversions.
///
/// The ranking core itself never fails: degenerate input produces empty or
/// neutral results. Errors only come from configuration and report fetching.
#[derive(Debug, thiserror::Error)]
pub enum ParetoError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// Result alias used across the workspace.
pub type ParetoResult<T> = Result<T, ParetoError>;
