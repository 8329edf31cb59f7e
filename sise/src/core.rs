use std::sync::Arc;

use sise_core::{Clock, DocumentSource, SystemClock};
use sise_types::{PipelineConfig, ResolverSpec, RowKind};

/// Orchestrator that resolves declared entities across their fallback tiers.
pub struct Sise {
    pub(crate) cfg: PipelineConfig,
    pub(crate) clock: Arc<dyn Clock>,
}

/// Builder for constructing a `Sise` orchestrator with custom configuration.
pub struct SiseBuilder {
    cfg: PipelineConfig,
    clock: Arc<dyn Clock>,
}

impl Default for SiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiseBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Defaults: the wall clock, and a confidence threshold that requires a
    /// current value plus a change/previous candidate (score 12 under the
    /// default weights).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: PipelineConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the minimum bundle score a tier must reach to be accepted.
    ///
    /// Behavior and trade-offs:
    /// - A lower threshold accepts current-only bundles (score 6 under the
    ///   default weights), trading completeness of derived columns for fewer
    ///   blank rows.
    /// - A higher threshold pushes more entities onto later tiers, which may
    ///   be slower or less structured.
    #[must_use]
    pub const fn min_confidence(mut self, score: i32) -> Self {
        self.cfg.min_confidence = score;
        self
    }

    /// Supply the clock used for every timestamp in the run.
    ///
    /// Pass a fixed clock to make snapshots deterministic under test.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the `Sise` orchestrator.
    #[must_use]
    pub fn build(self) -> Sise {
        Sise {
            cfg: self.cfg,
            clock: self.clock,
        }
    }
}

impl Sise {
    /// Start building a new `Sise` instance.
    #[must_use]
    pub fn builder() -> SiseBuilder {
        SiseBuilder::new()
    }
}

/// One declared entity: identity, ordered fallback tiers, and the resolver
/// parameterization to run against each tier's document.
#[derive(Clone)]
pub struct EntitySpec {
    /// Row category.
    pub kind: RowKind,
    /// Entity identifier (index code or display name), emitted verbatim.
    pub code: String,
    /// Ordered fallback tiers, tried first to last.
    pub tiers: Vec<Arc<dyn DocumentSource>>,
    /// Alias lists, guards, and weights for this entity's documents.
    pub resolver: ResolverSpec,
    /// Fixed as-of note overriding the default `"<now> | <tier>"` annotation.
    pub asof_note: Option<String>,
    /// Pre-rendered market-capitalization figure, supplied by a separate
    /// collection path (blank when absent).
    pub market_cap: Option<String>,
}

impl EntitySpec {
    /// Declare an entity with no tiers yet.
    pub fn new(kind: RowKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            tiers: Vec::new(),
            resolver: ResolverSpec::default(),
            asof_note: None,
            market_cap: None,
        }
    }

    /// Append a fallback tier. Order of calls is the fallback order.
    #[must_use]
    pub fn with_tier(mut self, tier: Arc<dyn DocumentSource>) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Replace the resolver parameterization for this entity.
    #[must_use]
    pub fn resolver(mut self, spec: ResolverSpec) -> Self {
        self.resolver = spec;
        self
    }

    /// Use a fixed as-of annotation instead of the tier-derived one.
    #[must_use]
    pub fn asof_note(mut self, note: impl Into<String>) -> Self {
        self.asof_note = Some(note.into());
        self
    }

    /// Attach an externally collected market-capitalization figure.
    #[must_use]
    pub fn market_cap(mut self, cap: impl Into<String>) -> Self {
        self.market_cap = Some(cap.into());
        self
    }
}

/// An ordered batch of entities resolved together.
///
/// Groups are concatenated in declared sequence by the merger; entity order
/// within a group is preserved verbatim in the output.
#[derive(Clone)]
pub struct EntityGroup {
    /// Entities in caller-declared output order.
    pub entities: Vec<EntitySpec>,
}

impl EntityGroup {
    /// Declare a group from an ordered entity list.
    #[must_use]
    pub fn new(entities: Vec<EntitySpec>) -> Self {
        Self { entities }
    }
}
