//! Externally visible output records.

use serde::{Deserialize, Serialize};

/// Category tag of an output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RowKind {
    /// Domestic market index.
    Index,
    /// Individual listed stock.
    Stock,
    /// Overseas (US) market index.
    UsIndex,
}

impl RowKind {
    /// Stable string form used by the tabular projection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Stock => "stock",
            Self::UsIndex => "us_index",
        }
    }
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved (or blank) output record per declared entity per run.
///
/// All fields are strings; the blank string is the canonical "unresolved"
/// representation in the tabular projection (never `null`/absent). Rows are
/// created once, never updated in place, and appended to an ordered output
/// collection whose order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Row category.
    #[serde(rename = "type")]
    pub kind: RowKind,
    /// Entity identifier (index code or display name).
    pub code: String,
    /// Trade date as reported by the source, verbatim.
    pub date: String,
    /// Current value.
    pub value: String,
    /// Previous session's value.
    pub prev_value: String,
    /// Day-over-day change.
    pub change: String,
    /// Day-over-day change in percent (with `%` suffix).
    pub change_pct: String,
    /// Market-capitalization figure.
    pub market_cap: String,
    /// As-of annotation in KST (timestamp plus source note).
    pub asof_kst: String,
    /// Collection timestamp in KST.
    pub fetched_at_kst: String,
}

impl QuoteRow {
    /// Placeholder row for an entity whose resolution failed entirely.
    ///
    /// Every field except the identity columns and the collection timestamp
    /// is blank; a failed entity still contributes a row so the output never
    /// shrinks below the declared entity count.
    #[must_use]
    pub fn blank(kind: RowKind, code: impl Into<String>, fetched_at_kst: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            date: String::new(),
            value: String::new(),
            prev_value: String::new(),
            change: String::new(),
            change_pct: String::new(),
            market_cap: String::new(),
            asof_kst: String::new(),
            fetched_at_kst: fetched_at_kst.into(),
        }
    }
}

/// Run-level output payload handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    /// Run timestamp in KST.
    pub updated_at: String,
    /// Ordered output rows, one per declared entity.
    pub rows: Vec<QuoteRow>,
}
