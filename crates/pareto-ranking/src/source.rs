//! In-memory report source backed by a vector of records.

use pareto_core::errors::{ParetoResult, SourceError};
use pareto_core::models::{ReportFilters, ReportItem, ReportRecord};
use pareto_core::traits::IReportSource;
use tracing::debug;

/// Report source over records held in memory, e.g. loaded from a JSON export.
///
/// Preserves record order, so repeated fetches with the same filters return
/// the same sequence.
pub struct InMemoryReportSource {
    name: String,
    records: Vec<ReportRecord>,
}

impl InMemoryReportSource {
    pub fn new(name: impl Into<String>, records: Vec<ReportRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Parse a JSON array of records. Every record needs a non-empty id.
    pub fn from_json(name: impl Into<String>, json: &str) -> ParetoResult<Self> {
        let records: Vec<ReportRecord> = serde_json::from_str(json).map_err(SourceError::from)?;
        if let Some(index) = records.iter().position(|r| r.id.trim().is_empty()) {
            return Err(SourceError::InvalidRecord {
                index,
                reason: "missing id".to_string(),
            }
            .into());
        }
        Ok(Self::new(name, records))
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IReportSource for InMemoryReportSource {
    fn fetch_filtered(&self, filters: &ReportFilters) -> ParetoResult<Vec<ReportItem>> {
        let items: Vec<ReportItem> = self
            .records
            .iter()
            .filter(|r| !r.text.trim().is_empty())
            .filter(|r| filters.matches(r))
            .map(ReportRecord::to_item)
            .collect();
        debug!(
            source = %self.name,
            total = self.records.len(),
            matched = items.len(),
            "fetched reports"
        );
        Ok(items)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
