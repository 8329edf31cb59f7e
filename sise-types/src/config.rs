//! Configuration types shared by the resolver and the pipeline.

use serde::{Deserialize, Serialize};

/// Semantic role a numeric candidate is proposed for.
///
/// Guard ranges are parameterized per role: an index level and a day-over-day
/// change live on very different scales, and a market-capitalization figure on
/// yet another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldRole {
    /// Current value of an index or instrument.
    IndexLevel,
    /// Day-over-day change amount.
    ChangeAmount,
    /// Previous session's closing value.
    PreviousClose,
    /// Market-capitalization figure.
    MarketCap,
}

/// Plausibility bounds for one field role.
///
/// A candidate outside `[min, max]` is rejected before scoring. The optional
/// `max_abs_delta` additionally bounds the candidate's distance from an
/// already-known reference value (used for change amounts).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Optional bound on the candidate's absolute value.
    pub max_abs_delta: Option<f64>,
}

impl GuardRange {
    /// Build a range with the given inclusive bounds and no delta bound.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_abs_delta: None,
        }
    }

    /// Add a bound on the candidate's absolute value.
    #[must_use]
    pub const fn with_max_abs_delta(mut self, limit: f64) -> Self {
        self.max_abs_delta = Some(limit);
        self
    }
}

/// Tolerance band for the previous-vs-current coherence guard.
///
/// A previous-value candidate is accepted only when
/// `current * low <= previous <= current * high`. The default band rejects a
/// spurious 68,000 next to a current value of 6,800.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceBand {
    /// Lower ratio bound (previous / current).
    pub low: f64,
    /// Upper ratio bound (previous / current).
    pub high: f64,
}

impl Default for CoherenceBand {
    fn default() -> Self {
        Self {
            low: 0.5,
            high: 1.5,
        }
    }
}

/// Per-role guard ranges for one target market/instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guards {
    /// Plausibility range for current and previous values.
    pub level: GuardRange,
    /// Plausibility range for day-change candidates (typically symmetric
    /// around zero).
    pub change: GuardRange,
    /// Optional plausibility range for market-cap candidates; `None` disables
    /// the bound.
    pub market_cap: Option<GuardRange>,
    /// Tolerance band for the previous-vs-current coherence check.
    pub coherence: CoherenceBand,
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            level: GuardRange::new(1_000.0, 60_000.0),
            change: GuardRange::new(-5_000.0, 5_000.0),
            market_cap: None,
            coherence: CoherenceBand::default(),
        }
    }
}

impl Guards {
    /// Guards tuned for a broad equity index trading in the low thousands to
    /// low tens of thousands.
    #[must_use]
    pub fn broad_index() -> Self {
        Self {
            level: GuardRange::new(1_000.0, 20_000.0),
            ..Self::default()
        }
    }

    /// Look up the guard range for a role, if one is configured.
    #[must_use]
    pub fn range(&self, role: FieldRole) -> Option<GuardRange> {
        match role {
            FieldRole::IndexLevel | FieldRole::PreviousClose => Some(self.level),
            FieldRole::ChangeAmount => Some(self.change),
            FieldRole::MarketCap => self.market_cap,
        }
    }
}

/// Ordered alias keys (tree mode) or text labels (text mode) per target field.
///
/// Order matters: the first alias present on a node wins. Static
/// configuration; the resolver never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSet {
    /// Aliases denoting the current value.
    pub current: Vec<String>,
    /// Aliases denoting the day-over-day change.
    pub change: Vec<String>,
    /// Aliases denoting the previous session's close.
    pub previous: Vec<String>,
    /// Aliases denoting the trade date.
    pub date: Vec<String>,
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

impl AliasSet {
    /// Default key vocabulary for JSON-like documents.
    #[must_use]
    pub fn tree_defaults() -> Self {
        Self {
            current: owned(&[
                "tradePrice",
                "currentPrice",
                "price",
                "closePrice",
                "lastPrice",
                "indexValue",
            ]),
            change: owned(&["changePrice", "change", "netChange", "changeValue"]),
            previous: owned(&[
                "prevClosingPrice",
                "previousClosePrice",
                "prevClosePrice",
                "basePrice",
            ]),
            date: owned(&["tradeDate", "date"]),
        }
    }

    /// Default label vocabulary for rendered-text documents (Korean quote
    /// pages). Labels are ordered most-specific first; matching is by
    /// substring, so the bare `전일` catches spelling variants.
    #[must_use]
    pub fn text_defaults() -> Self {
        Self {
            current: owned(&["현재지수", "현재가", "종가"]),
            change: owned(&["전일대비", "대비"]),
            previous: owned(&["전일종가", "전일지수", "전일가격", "전일가", "전일"]),
            date: owned(&["기준일", "일자"]),
        }
    }
}

impl Default for AliasSet {
    fn default() -> Self {
        Self::tree_defaults()
    }
}

/// Named weights for the additive candidate score.
///
/// The score of a node is the sum of the weights whose condition holds. All
/// weights are fixed per resolution; scoring is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// A current-value candidate is present.
    pub current: i32,
    /// A change or previous-value candidate is present.
    pub delta: i32,
    /// A date token is present.
    pub date: i32,
    /// Bonus: the current value sits comfortably inside the guard range
    /// (at least `level_bonus_margin` above the floor).
    pub level_bonus: i32,
    /// Bonus: the change is small in absolute terms
    /// (at most `delta_bonus_limit`).
    pub delta_bonus: i32,
    /// Margin above `Guards::level.min` required for the level bonus.
    pub level_bonus_margin: f64,
    /// Absolute change ceiling for the delta bonus.
    pub delta_bonus_limit: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            current: 6,
            delta: 6,
            date: 1,
            level_bonus: 2,
            delta_bonus: 2,
            level_bonus_margin: 200.0,
            delta_bonus_limit: 500.0,
        }
    }
}

impl ScoreWeights {
    /// Maximum achievable score (every condition holds).
    #[must_use]
    pub const fn max_score(&self) -> i32 {
        self.current + self.delta + self.date + self.level_bonus + self.delta_bonus
    }
}

/// Complete parameterization of one resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverSpec {
    /// Alias keys / text labels per target field.
    pub aliases: AliasSet,
    /// Per-role plausibility guards.
    pub guards: Guards,
    /// Additive scoring weights.
    pub weights: ScoreWeights,
    /// Hard bound on visited traversal nodes; guarantees termination on
    /// deeply nested or shared substructure.
    pub max_steps: usize,
    /// Score at which traversal stops immediately (strong match).
    pub strong_match: i32,
}

impl Default for ResolverSpec {
    fn default() -> Self {
        let weights = ScoreWeights::default();
        Self {
            aliases: AliasSet::default(),
            guards: Guards::default(),
            weights,
            max_steps: 200_000,
            strong_match: weights.max_score(),
        }
    }
}

/// Run-level pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum bundle score a tier must reach to be accepted; lower-scoring
    /// bundles advance the pipeline to the next tier.
    pub min_confidence: i32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { min_confidence: 12 }
    }
}
