//! sise-core
//!
//! Core types and pure computation shared across the sise ecosystem.
//!
//! - `document`: the unknown-shape input model (JSON-like tree or rendered text).
//! - `numeric`: locale-aware numeric canonicalization (grouped thousands,
//!   Korean 조/억 magnitudes, T/B/M suffixes, date-token filtering).
//! - `guard`: plausibility predicates that reject implausible candidates.
//! - `resolver`: the confidence-scored traversal that recovers named fields
//!   from a document of unknown shape.
//! - `derive`: arithmetic completion of {current, change, previous} and the
//!   percentage change.
//! - `source`: the `DocumentSource` trait implemented by acquisition tiers.
//! - `clock`: explicit clock abstraction (no global "now") with KST rendering.
//!
//! The resolver itself is synchronous, allocation-light, pure computation
//! over an already-materialized document; it performs no I/O and is bounded
//! by a hard visited-node counter. Only document *acquisition* (the
//! `DocumentSource` trait) is async, and it assumes a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Explicit clock abstraction and KST timestamp rendering.
pub mod clock;
/// Arithmetic completion of current/change/previous and percent change.
pub mod derive;
/// Unknown-shape input documents.
pub mod document;
/// Plausibility guards for numeric candidates.
pub mod guard;
/// Locale-aware numeric canonicalization.
pub mod numeric;
/// Confidence-scored field resolution over unknown-shape documents.
pub mod resolver;
/// The async acquisition-tier interface.
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derive::{Derived, complete};
pub use document::Document;
pub use guard::{accepts, coherent};
pub use numeric::{Magnitude, format_grouped, parse_market_cap, parse_quote};
pub use resolver::{Bundle, Candidates, Resolution, resolve, score};
pub use source::DocumentSource;

pub use sise_types::{
    AliasSet, CoherenceBand, FieldRole, GuardRange, Guards, PipelineConfig, QuoteRow,
    ResolverSpec, RowKind, ScoreWeights, SiseError, Snapshot,
};
