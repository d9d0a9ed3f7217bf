//! Chunker registry for managing chunking strategies.

use elemchunk_core::ChunkError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::spec::ChunkerSpec;
use crate::{BasicChunker, TitleChunker};

/// Registry of chunking strategies.
///
/// Shared by handle (`Arc<ChunkerRegistry>`); registration takes `&self` so
/// every holder sees strategies added by any other.
pub struct ChunkerRegistry {
    /// Strategy name to registry entry
    specs: RwLock<HashMap<String, Arc<ChunkerSpec>>>,
}

impl ChunkerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            specs: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the built-in `basic` and `by_title` strategies.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut specs = registry.specs.write().unwrap_or_else(PoisonError::into_inner);
            specs.insert("basic".to_string(), Arc::new(ChunkerSpec::new(BasicChunker::new())));
            specs.insert(
                "by_title".to_string(),
                Arc::new(ChunkerSpec::new(TitleChunker::new())),
            );
        }
        registry
    }

    /// Register a strategy, replacing any entry of the same name.
    pub fn register(&self, name: &str, spec: ChunkerSpec) -> Result<(), ChunkError> {
        if name.is_empty() {
            return Err(ChunkError::InvalidConfig(
                "chunking strategy name must not be empty".to_string(),
            ));
        }

        let previous = self
            .specs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::new(spec));

        if previous.is_some() {
            debug!("Replaced chunking strategy '{}'", name);
        } else {
            debug!("Registered chunking strategy '{}'", name);
        }
        Ok(())
    }

    /// Get the entry registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<ChunkerSpec>> {
        self.specs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.specs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Registered strategy names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .specs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChunkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
