//! Engine-level configuration.

/// Configuration carried by a [`crate::engine::GrouperEngine`].
///
/// The engine is otherwise parameterized entirely by its reference tables;
/// this struct only holds the bits that are not data-driven by the tables
/// themselves.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Version string stamped onto every [`crate::model::GrouperResult`]
    /// (e.g. `"6.3"`). Purely informational. The engine does not branch on it.
    pub version: String,
    /// Prefix used to discover sentinel DRG codes in the loaded catalog
    /// (the `265xx` namespace).
    pub sentinel_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "unknown".to_string(),
            sentinel_prefix: "265".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config stamped with the given version string.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }
}
