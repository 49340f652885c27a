//! RankingEngine: one request = fresh TF-IDF fit, clustering, scoring.
//!
//! Stateless across requests apart from the optional fitted-model cache,
//! which is keyed by corpus content and never serves a stale model.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use pareto_core::config::ParetoConfig;
use pareto_core::models::{
    ClusterStats, RankedProblem, RankingDebugInfo, ReportItem, SimilarityBreakdown, WordFrequency,
};
use rayon::prelude::*;
use tracing::debug;

use crate::clustering::{self, Cluster, PreparedReport};
use crate::rpn::{self, RpnBreakdown, RpnScorer};
use crate::summary;
use crate::tfidf::{TfIdfModel, TfIdfModelCache};
use crate::word_cloud;

/// Ranked clusters plus the stats of the run that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingOutcome {
    pub problems: Vec<RankedProblem>,
    pub stats: ClusterStats,
}

/// Everything computed from one corpus before scoring.
struct Analysis {
    model: Arc<TfIdfModel>,
    prepared: Vec<PreparedReport>,
    clusters: Vec<Vec<usize>>,
}

/// The ranking engine.
///
/// Holds configuration, an optional model cache and an optional fixed
/// reference date for recency scoring.
pub struct RankingEngine {
    config: ParetoConfig,
    cache: Option<TfIdfModelCache>,
    reference_date: Option<NaiveDate>,
}

impl RankingEngine {
    /// Create an engine. The model cache is built only if enabled in config.
    pub fn new(config: ParetoConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| TfIdfModelCache::from_config(&config.cache));
        Self {
            config,
            cache,
            reference_date: None,
        }
    }

    /// Score recency against a fixed date instead of today's UTC date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn config(&self) -> &ParetoConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&TfIdfModelCache> {
        self.cache.as_ref()
    }

    /// Date recency is measured from.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Cluster the corpus, score every cluster, and return the top `limit`
    /// by RPN together with run stats.
    ///
    /// An empty corpus yields no problems and all-zero stats.
    pub fn rank_top_problems(&self, corpus: &[ReportItem], limit: usize) -> RankingOutcome {
        let _span = tracing::info_span!("pareto.ranking", items = corpus.len(), limit).entered();

        if corpus.is_empty() {
            debug!("empty corpus, nothing to rank");
            return RankingOutcome::default();
        }

        let analysis = self.analyze(corpus);
        let stats = self.stats(corpus, &analysis);
        let centroid_weights = &self.config.similarity.centroid_weights;
        let scorer = RpnScorer::new(self.config.rpn.clone(), self.reference_date());

        let mut scored: Vec<(Cluster, RpnBreakdown)> = analysis
            .clusters
            .into_par_iter()
            .map(|members| {
                let centroid =
                    clustering::select_centroid(&members, &analysis.prepared, centroid_weights);
                let breakdown = scorer.score(members.len(), members.iter().map(|&i| corpus[i].date));
                (Cluster { members, centroid }, breakdown)
            })
            .collect();

        rpn::sort_by_rpn(&mut scored, |(_, breakdown)| breakdown.rpn);
        scored.truncate(limit);

        let problems: Vec<RankedProblem> = scored
            .into_iter()
            .enumerate()
            .map(|(pos, (cluster, breakdown))| {
                debug!(
                    rank = pos + 1,
                    size = cluster.len(),
                    frequency_score = breakdown.frequency,
                    recency_score = breakdown.recency,
                    rpn = breakdown.rpn,
                    "scored cluster"
                );
                self.describe(corpus, &cluster, breakdown, pos + 1, stats.vocabulary_size)
            })
            .collect();

        debug!(
            items = stats.total_items,
            clusters = stats.cluster_count,
            vocabulary = stats.vocabulary_size,
            top_terms = ?stats.top_terms,
            returned = problems.len(),
            "ranking complete"
        );

        RankingOutcome { problems, stats }
    }

    /// Corpus-wide keyword frequencies, at most `limit` entries.
    pub fn word_cloud(&self, corpus: &[ReportItem], limit: usize) -> Vec<WordFrequency> {
        let words = word_cloud::count_word_frequencies(
            corpus.iter().map(|item| item.text.as_str()),
            limit,
            self.config.summary.word_cloud_min_count,
        );
        debug!(items = corpus.len(), words = words.len(), "word cloud built");
        words
    }

    /// Run stats plus a per-pair signal breakdown over the leading reports.
    ///
    /// TF-IDF is fitted on the whole corpus, not just the compared prefix.
    pub fn debug_similarity(&self, corpus: &[ReportItem]) -> RankingDebugInfo {
        if corpus.is_empty() {
            return RankingDebugInfo::default();
        }

        let analysis = self.analyze(corpus);
        let stats = self.stats(corpus, &analysis);
        let weights = &self.config.similarity.clustering_weights;
        let text_chars = self.config.summary.debug_text_chars;
        let n = corpus.len().min(self.config.summary.debug_items);

        let mut similarity_pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in i + 1..n {
                let signals = clustering::pair_signals(&analysis.prepared[i], &analysis.prepared[j]);
                similarity_pairs.push(SimilarityBreakdown {
                    first_id: corpus[i].id.clone(),
                    first_text: truncate_chars(&corpus[i].text, text_chars),
                    second_id: corpus[j].id.clone(),
                    second_text: truncate_chars(&corpus[j].text, text_chars),
                    trigram_similarity: signals.trigram,
                    lcs_similarity: signals.lcs,
                    tfidf_similarity: signals.tfidf,
                    combined_similarity: signals.combined(weights),
                });
            }
        }

        RankingDebugInfo {
            stats,
            similarity_pairs,
        }
    }

    fn analyze(&self, corpus: &[ReportItem]) -> Analysis {
        let sim = &self.config.similarity;
        let keywords = clustering::corpus_keywords(corpus);
        let model = match &self.cache {
            Some(cache) => cache.get_or_fit(&keywords, sim.min_document_frequency),
            None => Arc::new(TfIdfModel::fit(&keywords, sim.min_document_frequency)),
        };
        let prepared = clustering::prepare(corpus, &keywords, &model);
        let clusters =
            clustering::cluster_reports(&prepared, &sim.clustering_weights, sim.clustering_threshold);

        Analysis {
            model,
            prepared,
            clusters,
        }
    }

    fn stats(&self, corpus: &[ReportItem], analysis: &Analysis) -> ClusterStats {
        ClusterStats {
            total_items: corpus.len(),
            vocabulary_size: analysis.model.vocabulary_size(),
            cluster_count: analysis.clusters.len(),
            top_terms: analysis.model.top_terms(self.config.summary.top_terms),
            threshold: self.config.similarity.clustering_threshold,
            weights: self.config.similarity.clustering_weights,
        }
    }

    fn describe(
        &self,
        corpus: &[ReportItem],
        cluster: &Cluster,
        breakdown: RpnBreakdown,
        rank: usize,
        vocabulary_size: usize,
    ) -> RankedProblem {
        let members: Vec<&ReportItem> = cluster.members.iter().map(|&i| &corpus[i]).collect();
        let texts: Vec<&str> = members.iter().map(|m| m.text.as_str()).collect();
        let representative = &corpus[cluster.centroid_index()];

        RankedProblem {
            rank,
            description: summary::cluster_key_phrase(&texts, self.config.summary.key_phrase_words),
            frequency: cluster.len(),
            rpn_score: breakdown.rpn,
            category: summary::most_common_category(members.iter().map(|m| m.category.as_deref())),
            sample_ids: summary::sample_ids(
                members.iter().map(|m| m.id.as_str()),
                self.config.summary.sample_ids,
            ),
            representative_id: representative.id.clone(),
            representative: representative.text.clone(),
            algorithm_info: format!("vocab: {}, cluster size: {}", vocabulary_size, cluster.len()),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(ParetoConfig::default())
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
