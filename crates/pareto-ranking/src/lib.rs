//! # pareto-ranking
//!
//! Semantic similarity and clustering engine for recurring problem reports:
//! normalize → trigram / LCS / TF-IDF signals → hybrid score → greedy
//! founder clustering → centroid → RPN → key phrase.
//! Also provides the corpus-wide word-frequency tally behind the word cloud.

pub mod clustering;
pub mod engine;
pub mod rpn;
pub mod service;
pub mod similarity;
pub mod source;
pub mod summary;
pub mod text;
pub mod tfidf;
pub mod word_cloud;

pub use engine::{RankingEngine, RankingOutcome};
pub use rpn::{RpnBreakdown, RpnScorer};
pub use service::RankingService;
pub use source::InMemoryReportSource;
pub use tfidf::{TfIdfModel, TfIdfModelCache, TfIdfVector};
