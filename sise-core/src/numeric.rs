use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sise_types::SiseError;

/// Maximal runs of digits, dots, and grouping commas, with an optional
/// leading sign (down moves render as `-13.83`).
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?[0-9][0-9.,]*").expect("static regex")
});

/// Accepted quote shapes: grouped thousands, or a plain number with at least
/// two integer digits (single stray digits are noise, not quotes).
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d{2,}(?:\.\d+)?)$").expect("static regex")
});

/// `YYYY.MM` / `YYYY.MM.DD` date shapes.
static DATE_LONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})\.(\d{1,2})(?:\.(\d{1,2}))?$").expect("static regex")
});

/// Two-digit-year `YY.MM.DD` date shape.
static DATE_SHORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})\.(\d{1,2})\.(\d{1,2})$").expect("static regex")
});

/// Number followed by a single-letter magnitude suffix, optionally prefixed
/// by a currency symbol: `$1.23T`, `456.7b`, `89 M`.
static SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[$€£]?\s*(\d{1,3}(?:,\d{3})*(?:\.\d+)?|\d+(?:\.\d+)?)\s*([TBM])\b")
        .expect("static regex")
});

/// Korean trillion (조) magnitude component.
static KOREAN_JO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})*(?:\.\d+)?)\s*조").expect("static regex")
});

/// Korean hundred-million (억) magnitude component.
static KOREAN_EOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})*(?:\.\d+)?)\s*억").expect("static regex")
});

/// Magnitude unit a canonicalized figure is expressed in.
///
/// The canonical base is a single currency unit (or index point); every
/// other variant is a fixed power-of-ten multiple of it. `HundredMillion`
/// and `Trillion` cover the Korean 억/조 vocabulary, where 1 조 = 10,000 억.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Magnitude {
    /// Single currency unit / index point.
    Unit,
    /// 10^6 (suffix `M`).
    Million,
    /// 10^8 (억).
    HundredMillion,
    /// 10^9 (suffix `B`).
    Billion,
    /// 10^12 (조, suffix `T`).
    Trillion,
}

impl Magnitude {
    /// Multiplier to the canonical base unit.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Million => 1e6,
            Self::HundredMillion => 1e8,
            Self::Billion => 1e9,
            Self::Trillion => 1e12,
        }
    }
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c| c == '.' || c == ',')
}

/// Whether a token has a date shape that a naive numeric parser would
/// happily misread as a value (e.g. `2025.08.22` → 2025.08).
pub(crate) fn is_date_token(token: &str) -> bool {
    if let Some(c) = DATE_LONG.captures(token) {
        let year_ok = c[1].parse::<u32>().is_ok_and(|y| (1900..=2100).contains(&y));
        let month_ok = c[2].parse::<u32>().is_ok_and(|m| (1..=12).contains(&m));
        let day_ok = c
            .get(3)
            .is_none_or(|d| d.as_str().parse::<u32>().is_ok_and(|d| (1..=31).contains(&d)));
        return year_ok && month_ok && day_ok;
    }
    if let Some(c) = DATE_SHORT.captures(token) {
        let month_ok = c[2].parse::<u32>().is_ok_and(|m| (1..=12).contains(&m));
        let day_ok = c[3].parse::<u32>().is_ok_and(|d| (1..=31).contains(&d));
        return month_ok && day_ok;
    }
    false
}

/// All plausible numeric tokens of `text`, in order of appearance, with
/// date-shaped tokens filtered out before selection.
pub(crate) fn scan_values(text: &str) -> impl Iterator<Item = f64> + '_ {
    TOKEN.find_iter(text).filter_map(|m| {
        let raw = trim_token(m.as_str());
        let (negative, token) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if token.is_empty() || is_date_token(token) || !NUMERIC.is_match(token) {
            return None;
        }
        token
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| if negative { -v } else { v })
    })
}

/// The first date-shaped token of `text`, verbatim.
pub(crate) fn first_date_token(text: &str) -> Option<&str> {
    TOKEN
        .find_iter(text)
        .map(|m| trim_token(m.as_str()).trim_start_matches('-'))
        .find(|t| is_date_token(t))
}

/// Extract the first quote-style numeric value from raw text.
///
/// Accepts grouped-thousands notation (`6,836.17`) and plain decimals with at
/// least two integer digits, with an optional leading minus. Date-shaped
/// tokens are excluded before
/// selection, so a lone `25.08.22` never masquerades as a value. Returns
/// `None` when nothing numeric is found; pure and total, never panics on
/// malformed input.
#[must_use]
pub fn parse_quote(text: &str) -> Option<f64> {
    scan_values(text).next()
}

fn korean_base_units(text: &str) -> Option<f64> {
    let jo = KOREAN_JO
        .captures(text)
        .and_then(|c| c[1].replace(',', "").parse::<f64>().ok());
    let eok = KOREAN_EOK
        .captures(text)
        .and_then(|c| c[1].replace(',', "").parse::<f64>().ok());
    if jo.is_none() && eok.is_none() {
        return None;
    }
    // Both magnitude components are summed in the smaller unit (억), then
    // expressed in base currency units: 1 조 = 10,000 억 = 10^12.
    let eok_total = jo.unwrap_or(0.0) * 10_000.0 + eok.unwrap_or(0.0);
    Some(eok_total * Magnitude::HundredMillion.factor())
}

/// Parse a market-capitalization figure and express it in `unit`.
///
/// Three notations are accepted, tried in order:
/// 1. Korean two-magnitude notation (`3조 4,512억`); present components are
///    summed.
/// 2. A number with a T/B/M magnitude suffix, case-insensitive, optionally
///    prefixed by a currency symbol (`$1.23T`).
/// 3. A bare numeric token, taken as base currency units.
///
/// # Errors
/// Returns `SiseError::Parse` when no numeric token matches any accepted
/// pattern. This is the canonicalizer's only failure mode.
pub fn parse_market_cap(text: &str, unit: Magnitude) -> Result<f64, SiseError> {
    if let Some(base) = korean_base_units(text) {
        return Ok(base / unit.factor());
    }

    if let Some(c) = SUFFIXED.captures(text) {
        if let Ok(n) = c[1].replace(',', "").parse::<f64>() {
            let factor = match c[2].to_ascii_uppercase().as_str() {
                "T" => Magnitude::Trillion.factor(),
                "B" => Magnitude::Billion.factor(),
                _ => Magnitude::Million.factor(),
            };
            return Ok(n * factor / unit.factor());
        }
    }

    scan_values(text)
        .next()
        .map(|v| v / unit.factor())
        .ok_or_else(|| SiseError::parse(format!("no market-cap token in {text:?}")))
}

/// Format a canonical value with grouped thousands and a fixed number of
/// decimals. Re-parsing the result with [`parse_quote`] recovers the value
/// up to the printed precision.
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let mut parts = rendered.splitn(2, '.');
    let int = parts.next().unwrap_or("0");
    let frac = parts.next();

    let mut out = String::with_capacity(rendered.len() + int.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}
