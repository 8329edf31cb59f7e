use serde_json::Value;
use sise_types::SiseError;

/// One raw input document of unknown shape.
///
/// Produced by an acquisition tier and consumed read-only by the resolver;
/// the resolver never mutates it. The two shapes mirror what quote pages
/// actually hand us: a deserialized JSON-like tree (structured endpoints,
/// embedded page-state blobs) or a block of rendered visible text.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Arbitrary tree of mappings/sequences/scalars.
    Tree(Value),
    /// Plain rendered text.
    Text(String),
}

impl Document {
    /// Wrap an already-deserialized JSON tree.
    #[must_use]
    pub const fn tree(value: Value) -> Self {
        Self::Tree(value)
    }

    /// Wrap a rendered text block.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// Deserialize a JSON string into a tree document.
    ///
    /// # Errors
    /// Returns `SiseError::Data` when the payload is not valid JSON.
    pub fn parse_json(payload: &str) -> Result<Self, SiseError> {
        serde_json::from_str::<Value>(payload)
            .map(Self::Tree)
            .map_err(|e| SiseError::Data(format!("document is not valid JSON: {e}")))
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::Tree(value)
    }
}
