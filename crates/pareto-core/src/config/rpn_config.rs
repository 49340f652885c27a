use serde::{Deserialize, Serialize};

use super::defaults;

/// Risk Priority Number configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RpnConfig {
    /// Weight of the log-scaled frequency component.
    pub frequency_weight: f64,
    /// Weight of the recency component.
    pub recency_weight: f64,
    /// Decay constant in days for the exponential recency score.
    pub recency_window_days: u32,
    /// Recency score used when no member of a cluster has a date.
    pub neutral_recency: f64,
}

impl Default for RpnConfig {
    fn default() -> Self {
        Self {
            frequency_weight: defaults::DEFAULT_FREQUENCY_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            recency_window_days: defaults::DEFAULT_RECENCY_WINDOW_DAYS,
            neutral_recency: defaults::DEFAULT_NEUTRAL_RECENCY,
        }
    }
}
