use crate::errors::ParetoResult;
use crate::models::{ReportFilters, ReportItem};

/// A store of problem reports that can be queried with filter criteria.
///
/// Implementations must only return items with non-empty text, and must
/// return them in a stable order: clustering is order-dependent, so the same
/// filters over the same data must always produce the same sequence.
pub trait IReportSource: Send + Sync {
    fn fetch_filtered(&self, filters: &ReportFilters) -> ParetoResult<Vec<ReportItem>>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}
