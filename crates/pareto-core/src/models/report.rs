use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One problem report as consumed by the ranking engine.
///
/// Immutable once fetched and owned by a single ranking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    /// Opaque identifier from the report store.
    pub id: String,
    /// Free-text problem description.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Calendar date the problem was reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ReportItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: None,
            date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Whether the description carries any non-whitespace content.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// A full report row as held by a report store.
///
/// Carries the filterable attributes that the ranking engine itself never
/// looks at. Converted into a [`ReportItem`] once it passes the filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub department: Option<String>,
    /// Person or team the report is addressed to.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Person who filed the report.
    #[serde(default)]
    pub reporter: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ReportRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: None,
            date: None,
            department: None,
            assignee: None,
            reporter: None,
            status: None,
        }
    }

    /// Project the record down to the fields the ranking engine consumes.
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            id: self.id.clone(),
            text: self.text.clone(),
            category: self.category.clone().filter(|c| !c.trim().is_empty()),
            date: self.date,
        }
    }
}
