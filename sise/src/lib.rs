//! Sise orchestrates quote-field resolution across ordered fallback tiers.
//!
//! Overview
//! - Each declared entity carries an ordered list of `DocumentSource` tiers
//!   (structured endpoint, alternate endpoint, embedded page-state blob,
//!   visible-text heuristic). Tiers are tried strictly in order; the first
//!   bundle clearing the confidence threshold wins and later tiers are never
//!   invoked.
//! - A tier's acquisition failure is logged and treated as "no document
//!   produced"; it never fails the run. An entity whose tiers are all
//!   exhausted still contributes a blank row, so the output always holds one
//!   row per declared entity.
//! - Entities within a group are resolved concurrently; resolution itself is
//!   pure, synchronous computation with no shared mutable state, so no extra
//!   locking is involved.
//! - The clock is explicit: pass a fixed clock for deterministic snapshots
//!   under test.
//!
//! Building an orchestrator and taking a snapshot:
//! ```rust,ignore
//! use std::sync::Arc;
//! use sise::{EntityGroup, EntitySpec, Sise};
//! use sise_core::RowKind;
//!
//! let sise = Sise::builder().min_confidence(12).build();
//! let kospi = EntitySpec::new(RowKind::Index, "KOSPI")
//!     .with_tier(Arc::new(primary_endpoint))
//!     .with_tier(Arc::new(rendered_text_fallback));
//! let snapshot = sise
//!     .snapshot(vec![EntityGroup::new(vec![kospi])])
//!     .await?;
//! println!("{}", sise::to_csv(&snapshot.rows));
//! ```
//!
//! See `sise/examples/` for a runnable end-to-end demonstration against the
//! deterministic mock source.
#![warn(missing_docs)]

pub(crate) mod core;
mod merge;
mod pipeline;
mod report;

pub use crate::core::{EntityGroup, EntitySpec, Sise, SiseBuilder};
pub use merge::merge_groups;
pub use report::{CSV_HEADER, format_market_cap, to_csv, to_json};

// Re-export core types for convenience
pub use sise_core::{
    AliasSet,
    Bundle,
    Candidates,
    Clock,
    CoherenceBand,
    Derived,
    Document,
    DocumentSource,
    FieldRole,
    FixedClock,
    GuardRange,
    Guards,
    Magnitude,
    PipelineConfig,
    QuoteRow,
    Resolution,
    ResolverSpec,
    RowKind,
    ScoreWeights,
    SiseError,
    Snapshot,
    SystemClock,
    complete,
    format_grouped,
    parse_market_cap,
    parse_quote,
    resolve,
    score,
};
