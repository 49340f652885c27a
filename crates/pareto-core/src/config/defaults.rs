// Single source of truth for all default values.

use crate::models::SimilarityWeights;

// --- Similarity ---
pub const DEFAULT_CLUSTERING_THRESHOLD: f64 = 0.15;
pub const DEFAULT_CLUSTERING_WEIGHTS: SimilarityWeights = SimilarityWeights::CLUSTERING;
pub const DEFAULT_CENTROID_WEIGHTS: SimilarityWeights = SimilarityWeights::CENTROID;
pub const DEFAULT_MIN_DOCUMENT_FREQUENCY: usize = 2;

// --- RPN ---
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.6;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.4;
pub const DEFAULT_RECENCY_WINDOW_DAYS: u32 = 90; // ~3 months
pub const DEFAULT_NEUTRAL_RECENCY: f64 = 5.0;

// --- Summary ---
pub const DEFAULT_KEY_PHRASE_WORDS: usize = 4;
pub const DEFAULT_SAMPLE_IDS: usize = 5;
pub const DEFAULT_TOP_TERMS: usize = 10;
pub const DEFAULT_WORD_CLOUD_LIMIT: usize = 30;
pub const DEFAULT_WORD_CLOUD_MIN_COUNT: usize = 2;
pub const DEFAULT_RANK_LIMIT: usize = 6;
pub const DEFAULT_DEBUG_ITEMS: usize = 10;
pub const DEFAULT_DEBUG_TEXT_CHARS: usize = 50;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = false;
pub const DEFAULT_CACHE_MAX_MODELS: u64 = 16;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600; // 10 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
