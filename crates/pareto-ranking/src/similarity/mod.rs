//! Lexical similarity signals and the hybrid combiner.
//!
//! - Trigram: Jaccard index over character 3-gram sets
//! - LCS: longest common contiguous substring / longer length
//! - TF-IDF cosine lives in [`crate::tfidf`]

pub mod hybrid;
pub mod lcs;
pub mod trigram;

pub use hybrid::SimilaritySignals;
pub use lcs::{lcs_similarity, longest_common_substring};
pub use trigram::{generate_trigrams, trigram_similarity, TrigramSet};
