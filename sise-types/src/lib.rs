//! Sise-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod row;

pub use config::{
    AliasSet, CoherenceBand, FieldRole, GuardRange, Guards, PipelineConfig, ResolverSpec,
    ScoreWeights,
};
pub use error::SiseError;
pub use row::{QuoteRow, RowKind, Snapshot};
