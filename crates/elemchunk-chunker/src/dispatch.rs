//! Dispatch of elements to a chunking strategy by name.

use elemchunk_core::{ChunkError, ChunkOptions, Element};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::ChunkingConfig;
use crate::registry::ChunkerRegistry;
use crate::spec::ChunkerSpec;

/// Routes chunking requests to registered strategies.
///
/// Cloning a dispatcher is cheap and the clones share one registry.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ChunkerRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a fresh registry holding the built-in strategies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(ChunkerRegistry::with_builtins()))
    }

    /// Create a dispatcher over an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<ChunkerRegistry>) -> Self {
        Self { registry }
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<ChunkerRegistry> {
        &self.registry
    }

    /// Make a chunker available under `name` as a chunking strategy.
    pub fn register_chunking_strategy(
        &self,
        name: &str,
        spec: ChunkerSpec,
    ) -> Result<(), ChunkError> {
        self.registry.register(name, spec)
    }

    /// Chunk `elements` with the strategy registered as `chunking_strategy`.
    ///
    /// `options` may hold options meant for other stages; only those the
    /// chunker declares are passed on. Errors from the chunker are returned
    /// as-is.
    pub fn chunk(
        &self,
        elements: Vec<Element>,
        chunking_strategy: &str,
        options: &ChunkOptions,
    ) -> Result<Vec<Element>, ChunkError> {
        let spec = self
            .registry
            .get(chunking_strategy)
            .ok_or_else(|| ChunkError::UnknownStrategy(chunking_strategy.to_string()))?;

        let chunking_options = spec.filter_options(options)?;
        if chunking_options.len() < options.len() {
            let dropped: Vec<&str> = options
                .keys()
                .filter(|key| !chunking_options.contains_key(key))
                .collect();
            trace!(
                "Dropping options not accepted by '{}': {:?}",
                chunking_strategy,
                dropped
            );
        }

        debug!(
            "Dispatching {} elements to chunking strategy '{}'",
            elements.len(),
            chunking_strategy
        );
        spec.chunker().chunk(elements, &chunking_options)
    }

    /// Chunk `elements` as described by `config`.
    ///
    /// Without a configured strategy the elements are returned unchanged.
    pub fn chunk_with_config(
        &self,
        elements: Vec<Element>,
        config: &ChunkingConfig,
    ) -> Result<Vec<Element>, ChunkError> {
        match config.chunking_strategy.as_deref() {
            Some(strategy) => self.chunk(elements, strategy, &config.options),
            None => Ok(elements),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
