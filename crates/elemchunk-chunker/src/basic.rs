//! Basic chunking strategy.
//!
//! Greedily packs consecutive elements into chunks up to the size limits,
//! ignoring document structure. Tables always get chunks of their own.

use elemchunk_core::{ChunkError, ChunkOptions, Chunker, Element, Signature};
use tracing::debug;

use crate::base::{build_chunks, pre_chunk, ChunkingOptions};

/// Parameters accepted by [`BasicChunker`].
pub const BASIC_PARAMETERS: &[&str] = &[
    "elements",
    "max_characters",
    "new_after_n_chars",
    "overlap",
    "overlap_all",
    "include_orig_elements",
];

/// Greedy size-bounded chunker.
pub struct BasicChunker;

impl BasicChunker {
    /// Create a new basic chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BasicChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for BasicChunker {
    fn name(&self) -> &str {
        "basic"
    }

    fn signature(&self) -> Option<Signature> {
        Some(Signature::new(BASIC_PARAMETERS.iter().copied()))
    }

    fn chunk(
        &self,
        elements: Vec<Element>,
        options: &ChunkOptions,
    ) -> Result<Vec<Element>, ChunkError> {
        let opts = ChunkingOptions::basic(options)?;
        if elements.is_empty() {
            return Ok(vec![]);
        }

        let element_count = elements.len();
        let pre_chunks = pre_chunk(elements, &opts, |_| false);
        let chunks = build_chunks(pre_chunks, &opts);

        debug!(
            "Basic chunking {} elements into {} chunks (max {} chars)",
            element_count,
            chunks.len(),
            opts.max_characters
        );
        Ok(chunks)
    }
}
