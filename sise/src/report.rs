//! Tabular and JSON projections of a snapshot.

use sise_types::{QuoteRow, SiseError, Snapshot};

/// Fixed positional columns of the tabular projection.
pub const CSV_HEADER: [&str; 10] = [
    "type",
    "code",
    "date",
    "value",
    "prev_value",
    "change",
    "change_pct",
    "market_cap",
    "asof_kst",
    "fetched_at_kst",
];

/// Render rows as CSV with the fixed positional header.
///
/// Fields containing a separator, quote, or newline are quoted, with inner
/// quote characters doubled. The blank string is the canonical "unresolved"
/// representation; no field is ever omitted.
#[must_use]
pub fn to_csv(rows: &[QuoteRow]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');
    for row in rows {
        let kind = row.kind.as_str();
        let fields = [
            kind,
            &row.code,
            &row.date,
            &row.value,
            &row.prev_value,
            &row.change,
            &row.change_pct,
            &row.market_cap,
            &row.asof_kst,
            &row.fetched_at_kst,
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Serialize the run payload (`{ updated_at, rows }`) as pretty JSON.
///
/// # Errors
/// Returns `SiseError::Data` when serialization fails.
pub fn to_json(snapshot: &Snapshot) -> Result<String, SiseError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| SiseError::Data(format!("snapshot serialization failed: {e}")))
}

/// Render a market-cap figure in trillions with a unit label, e.g.
/// `format_market_cap(2.5, "T USD")` → `"2.50 T USD"`.
#[must_use]
pub fn format_market_cap(value: f64, label: &str) -> String {
    format!("{value:.2} {label}")
}

pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}"))
}

pub(crate) fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}%"))
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
