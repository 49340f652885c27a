//! Error handling for pareto.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod pareto_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use pareto_error::{ParetoError, ParetoResult};
pub use source_error::SourceError;
