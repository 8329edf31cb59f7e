//! Deterministic mock `DocumentSource` for CI-safe tests and examples.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use sise_core::{Document, DocumentSource, SiseError};

pub mod fixtures;

enum Payload {
    Tree(Value),
    Text(String),
    Fail(String),
}

/// Mock acquisition tier serving a fixed payload on every call.
///
/// Counts invocations so tests can assert that lower-priority tiers are never
/// touched once an earlier tier produced an accepted bundle.
pub struct MockSource {
    name: &'static str,
    payload: Payload,
    hits: AtomicUsize,
}

impl MockSource {
    /// Tier that serves a JSON-like tree document.
    #[must_use]
    pub const fn tree(name: &'static str, value: Value) -> Self {
        Self {
            name,
            payload: Payload::Tree(value),
            hits: AtomicUsize::new(0),
        }
    }

    /// Tier that serves a rendered-text document.
    #[must_use]
    pub fn text(name: &'static str, body: impl Into<String>) -> Self {
        Self {
            name,
            payload: Payload::Text(body.into()),
            hits: AtomicUsize::new(0),
        }
    }

    /// Tier whose acquisition always fails (simulated network/navigation
    /// error).
    #[must_use]
    pub fn failing(name: &'static str, msg: impl Into<String>) -> Self {
        Self {
            name,
            payload: Payload::Fail(msg.into()),
            hits: AtomicUsize::new(0),
        }
    }

    /// How many times `acquire` has been called.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn acquire(&self) -> Result<Document, SiseError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Payload::Tree(value) => Ok(Document::Tree(value.clone())),
            Payload::Text(body) => Ok(Document::Text(body.clone())),
            Payload::Fail(msg) => Err(SiseError::acquisition(self.name, msg.clone())),
        }
    }
}
