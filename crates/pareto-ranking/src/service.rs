//! RankingService: fetch the filtered corpus once, then hand it to the engine.

use pareto_core::errors::ParetoResult;
use pareto_core::models::{RankingDebugInfo, ReportFilters, WordFrequency};
use pareto_core::traits::IReportSource;
use tracing::info;

use crate::engine::{RankingEngine, RankingOutcome};

/// Binds a report source to a ranking engine.
pub struct RankingService<'a> {
    source: &'a dyn IReportSource,
    engine: RankingEngine,
}

impl<'a> RankingService<'a> {
    pub fn new(source: &'a dyn IReportSource, engine: RankingEngine) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    /// Top problems for the filtered corpus. `None` uses the configured
    /// default limit.
    pub fn top_problems(
        &self,
        filters: &ReportFilters,
        limit: Option<usize>,
    ) -> ParetoResult<RankingOutcome> {
        let limit = limit.unwrap_or(self.engine.config().summary.default_rank_limit);
        let corpus = self.source.fetch_filtered(filters)?;
        let outcome = self.engine.rank_top_problems(&corpus, limit);
        info!(
            source = self.source.name(),
            items = outcome.stats.total_items,
            clusters = outcome.stats.cluster_count,
            vocabulary = outcome.stats.vocabulary_size,
            top_terms = ?outcome.stats.top_terms,
            "top problems ranked"
        );
        Ok(outcome)
    }

    /// Word cloud for the filtered corpus. `None` uses the configured limit.
    pub fn word_cloud(
        &self,
        filters: &ReportFilters,
        limit: Option<usize>,
    ) -> ParetoResult<Vec<WordFrequency>> {
        let limit = limit.unwrap_or(self.engine.config().summary.word_cloud_limit);
        let corpus = self.source.fetch_filtered(filters)?;
        Ok(self.engine.word_cloud(&corpus, limit))
    }

    pub fn debug_info(&self, filters: &ReportFilters) -> ParetoResult<RankingDebugInfo> {
        let corpus = self.source.fetch_filtered(filters)?;
        Ok(self.engine.debug_similarity(&corpus))
    }
}
