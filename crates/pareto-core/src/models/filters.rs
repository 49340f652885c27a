use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ReportRecord;

/// Filter criteria applied by a report source before ranking.
///
/// Empty strings are treated the same as absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFilters {
    /// Case-insensitive substring match on the department.
    pub department: Option<String>,
    /// Case-insensitive substring match on the category.
    pub category: Option<String>,
    /// Case-insensitive substring match on the assignee.
    pub assignee: Option<String>,
    /// Case-insensitive substring match on the reporter.
    pub reporter: Option<String>,
    /// Exact status match.
    pub status: Option<String>,
    /// Case-insensitive substring over text, department and reporter.
    pub search: Option<String>,
    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub end_date: Option<NaiveDate>,
}

impl ReportFilters {
    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        active(&self.department).is_none()
            && active(&self.category).is_none()
            && active(&self.assignee).is_none()
            && active(&self.reporter).is_none()
            && active(&self.status).is_none()
            && active(&self.search).is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check a record against every active criterion.
    pub fn matches(&self, record: &ReportRecord) -> bool {
        if let Some(dept) = active(&self.department) {
            if !contains_ci(record.department.as_deref(), dept) {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if !contains_ci(record.category.as_deref(), category) {
                return false;
            }
        }
        if let Some(assignee) = active(&self.assignee) {
            if !contains_ci(record.assignee.as_deref(), assignee) {
                return false;
            }
        }
        if let Some(reporter) = active(&self.reporter) {
            if !contains_ci(record.reporter.as_deref(), reporter) {
                return false;
            }
        }
        if let Some(status) = active(&self.status) {
            if record.status.as_deref() != Some(status) {
                return false;
            }
        }
        if let Some(search) = active(&self.search) {
            let hit = contains_ci(Some(&record.text), search)
                || contains_ci(record.department.as_deref(), search)
                || contains_ci(record.reporter.as_deref(), search);
            if !hit {
                return false;
            }
        }
        if self.start_date.is_some() || self.end_date.is_some() {
            let Some(date) = record.date else {
                return false;
            };
            if self.start_date.is_some_and(|start| date < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| date > end) {
                return false;
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}
