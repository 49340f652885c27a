use serde::{Deserialize, Serialize};

use super::defaults;

/// Output shaping: key phrases, samples, word cloud, debug breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum words in a cluster key phrase.
    pub key_phrase_words: usize,
    /// Maximum member ids reported per cluster.
    pub sample_ids: usize,
    /// Number of highest-IDF terms reported in stats.
    pub top_terms: usize,
    pub word_cloud_limit: usize,
    /// Words occurring fewer times than this are left out of the word cloud.
    pub word_cloud_min_count: usize,
    /// Number of clusters returned when the caller gives no limit.
    pub default_rank_limit: usize,
    /// Number of leading reports compared pairwise in the debug breakdown.
    pub debug_items: usize,
    /// Characters of report text kept in the debug breakdown.
    pub debug_text_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            key_phrase_words: defaults::DEFAULT_KEY_PHRASE_WORDS,
            sample_ids: defaults::DEFAULT_SAMPLE_IDS,
            top_terms: defaults::DEFAULT_TOP_TERMS,
            word_cloud_limit: defaults::DEFAULT_WORD_CLOUD_LIMIT,
            word_cloud_min_count: defaults::DEFAULT_WORD_CLOUD_MIN_COUNT,
            default_rank_limit: defaults::DEFAULT_RANK_LIMIT,
            debug_items: defaults::DEFAULT_DEBUG_ITEMS,
            debug_text_chars: defaults::DEFAULT_DEBUG_TEXT_CHARS,
        }
    }
}
