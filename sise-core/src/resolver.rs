//! Confidence-scored field resolution over unknown-shape documents.
//!
//! One resolution pass walks the document (iterative depth-first, identity
//! de-duplicated, bounded by a hard step counter), collects guard-checked
//! candidate values per target field at every mapping node, scores each node
//! additively, and keeps the best-scoring node. Traversal and scoring are
//! interleaved; a node that reaches the configured strong-match score stops
//! the walk immediately. The first-encountered node wins ties, which makes
//! the whole pass deterministic for a fixed document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sise_types::{FieldRole, Guards, ResolverSpec, ScoreWeights};

use crate::document::Document;
use crate::{derive, guard, numeric};

/// Outcome of one resolution pass over one document.
///
/// `Exhausted` is a normal, non-exceptional outcome: the document simply did
/// not contain a usable current-value candidate. The caller decides whether
/// to escalate to the next fallback tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// At least the current-value field was found.
    Resolved(Bundle),
    /// No usable candidate anywhere in the document.
    Exhausted,
}

/// The resolver's final answer for one document.
///
/// Invariant: when `current` and an observed change are both present,
/// `previous` is always `current − change`, recomputed — never taken from a
/// separately resolved candidate. Derived fields have a single source of
/// truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Current value.
    pub current: f64,
    /// Day-over-day change (observed, or derived from a previous value).
    pub change: Option<f64>,
    /// Previous session's value (derived from change when both available).
    pub previous: Option<f64>,
    /// Trade-date token, verbatim as found.
    pub date: Option<String>,
    /// Confidence score of the winning node.
    pub score: i32,
}

/// Candidate values collected at one traversal node, pre-scoring.
///
/// Ephemeral: created and discarded within one resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    /// Current-value candidate.
    pub current: Option<f64>,
    /// Change-amount candidate.
    pub change: Option<f64>,
    /// Previous-close candidate (already coherence-checked).
    pub previous: Option<f64>,
    /// Date token, verbatim.
    pub date: Option<String>,
}

/// Additive deterministic score of one node's candidates.
///
/// Each present field contributes its named weight; two bonus weights reward
/// the more trustworthy pattern of a current value comfortably inside the
/// guard range and a small absolute change.
#[must_use]
pub fn score(c: &Candidates, guards: &Guards, weights: &ScoreWeights) -> i32 {
    let mut total = 0;
    if c.current.is_some() {
        total += weights.current;
    }
    if c.change.is_some() || c.previous.is_some() {
        total += weights.delta;
    }
    if c.date.is_some() {
        total += weights.date;
    }
    if let Some(cur) = c.current {
        let floor = guards.level.min + weights.level_bonus_margin;
        if cur >= floor && cur <= guards.level.max {
            total += weights.level_bonus;
        }
    }
    let small_delta = match (c.change, c.current, c.previous) {
        (Some(chg), _, _) => chg.abs() <= weights.delta_bonus_limit,
        (None, Some(cur), Some(prev)) => (cur - prev).abs() <= weights.delta_bonus_limit,
        _ => false,
    };
    if small_delta {
        total += weights.delta_bonus;
    }
    total
}

/// Resolve one document into a field bundle.
///
/// Never fails: a malformed or untraversable document yields
/// [`Resolution::Exhausted`].
#[must_use]
pub fn resolve(doc: &Document, spec: &ResolverSpec) -> Resolution {
    match doc {
        Document::Tree(root) => resolve_tree(root, spec),
        Document::Text(body) => resolve_text(body, spec),
    }
}

fn resolve_tree(root: &Value, spec: &ResolverSpec) -> Resolution {
    let mut best: Option<(i32, Candidates)> = None;
    let mut stack: Vec<&Value> = vec![root];
    // Keyed by node address: shared substructure is visited once, and the
    // step counter bounds pathological nesting regardless.
    let mut seen: HashSet<usize> = HashSet::new();
    let mut steps = 0usize;

    while let Some(node) = stack.pop() {
        if steps >= spec.max_steps {
            break;
        }
        steps += 1;
        if !seen.insert(std::ptr::from_ref(node) as usize) {
            continue;
        }

        match node {
            Value::Object(map) => {
                let candidates = collect(map, spec);
                let node_score = score(&candidates, &spec.guards, &spec.weights);
                // Strictly greater: the first-encountered best node wins ties.
                if best.as_ref().is_none_or(|(s, _)| node_score > *s) {
                    let strong = node_score >= spec.strong_match;
                    best = Some((node_score, candidates));
                    if strong {
                        break;
                    }
                }
                for child in map.values().rev() {
                    if child.is_object() || child.is_array() {
                        stack.push(child);
                    }
                }
            }
            Value::Array(items) => {
                for child in items.iter().rev() {
                    if child.is_object() || child.is_array() {
                        stack.push(child);
                    }
                }
            }
            _ => {}
        }
    }

    bundle_from(best)
}

fn resolve_text(body: &str, spec: &ResolverSpec) -> Resolution {
    let guards = &spec.guards;
    let current = labeled_value(body, &spec.aliases.current, FieldRole::IndexLevel, guards);
    let change = labeled_value(body, &spec.aliases.change, FieldRole::ChangeAmount, guards);
    let mut previous = labeled_value(body, &spec.aliases.previous, FieldRole::PreviousClose, guards);
    if let (Some(cur), Some(prev)) = (current, previous) {
        if !guard::coherent(cur, prev, guards.coherence) {
            previous = None;
        }
    }
    let date = labeled_date(body, &spec.aliases.date);

    let candidates = Candidates {
        current,
        change,
        previous,
        date,
    };
    let text_score = score(&candidates, guards, &spec.weights);
    bundle_from(Some((text_score, candidates)))
}

fn bundle_from(best: Option<(i32, Candidates)>) -> Resolution {
    let Some((node_score, candidates)) = best else {
        return Resolution::Exhausted;
    };
    let Some(current) = candidates.current else {
        return Resolution::Exhausted;
    };
    // `complete` recomputes previous from change when both were observed.
    let derived = derive::complete(Some(current), candidates.change, candidates.previous);
    Resolution::Resolved(Bundle {
        current,
        change: derived.change,
        previous: derived.previous,
        date: candidates.date,
        score: node_score,
    })
}

fn collect(map: &serde_json::Map<String, Value>, spec: &ResolverSpec) -> Candidates {
    let aliases = &spec.aliases;
    let guards = &spec.guards;

    let current = pick_number(map, &aliases.current, FieldRole::IndexLevel, guards);
    let change = pick_number(map, &aliases.change, FieldRole::ChangeAmount, guards);
    let mut previous = pick_number(map, &aliases.previous, FieldRole::PreviousClose, guards);
    if let (Some(cur), Some(prev)) = (current, previous) {
        if !guard::coherent(cur, prev, guards.coherence) {
            previous = None;
        }
    }

    let date = aliases.date.iter().find_map(|key| match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    });

    Candidates {
        current,
        change,
        previous,
        date,
    }
}

fn pick_number(
    map: &serde_json::Map<String, Value>,
    keys: &[String],
    role: FieldRole,
    guards: &Guards,
) -> Option<f64> {
    keys.iter().find_map(|key| {
        let value = numeric_value(map.get(key)?)?;
        guard::accepts(value, role, guards).then_some(value)
    })
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if numeric::is_date_token(trimmed) {
                return None;
            }
            // Full-string parse first so a leading minus survives; fall back
            // to token scanning for decorated values ("6,836.17 KRW").
            trimmed
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .or_else(|| numeric::parse_quote(trimmed))
        }
        _ => None,
    }
}

fn label_window(body: &str, label: &str) -> Option<String> {
    let idx = body.find(label)?;
    let rest = &body[idx + label.len()..];
    // Rendered text may put the value on the line after its label; keep the
    // label's line and the next one.
    Some(rest.lines().take(2).collect::<Vec<_>>().join(" "))
}

fn labeled_value(body: &str, labels: &[String], role: FieldRole, guards: &Guards) -> Option<f64> {
    labels.iter().find_map(|label| {
        let window = label_window(body, label)?;
        numeric::scan_values(&window).find(|v| guard::accepts(*v, role, guards))
    })
}

fn labeled_date(body: &str, labels: &[String]) -> Option<String> {
    labels
        .iter()
        .find_map(|label| {
            let window = label_window(body, label)?;
            numeric::first_date_token(&window).map(str::to_string)
        })
        .or_else(|| numeric::first_date_token(body).map(str::to_string))
}
