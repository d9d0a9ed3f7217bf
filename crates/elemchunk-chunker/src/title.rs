//! Section-aware chunking strategy.
//!
//! Like [`BasicChunker`](crate::BasicChunker), but a `Title` element always
//! starts a new chunk so chunks never straddle section boundaries. Runs of
//! very small sections (a series of headings, say) are combined afterwards.

use elemchunk_core::{ChunkError, ChunkOptions, Chunker, Element, ElementCategory, Signature};
use tracing::debug;

use crate::base::{build_chunks, combine_small_sections, pre_chunk, ChunkingOptions};

/// Parameters accepted by [`TitleChunker`].
pub const BY_TITLE_PARAMETERS: &[&str] = &[
    "elements",
    "max_characters",
    "new_after_n_chars",
    "overlap",
    "overlap_all",
    "include_orig_elements",
    "combine_text_under_n_chars",
    "multipage_sections",
];

/// Chunker that respects section boundaries.
pub struct TitleChunker;

impl TitleChunker {
    /// Create a new by-title chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for TitleChunker {
    fn name(&self) -> &str {
        "by_title"
    }

    fn signature(&self) -> Option<Signature> {
        Some(Signature::new(BY_TITLE_PARAMETERS.iter().copied()))
    }

    fn chunk(
        &self,
        elements: Vec<Element>,
        options: &ChunkOptions,
    ) -> Result<Vec<Element>, ChunkError> {
        let opts = ChunkingOptions::by_title(options)?;
        if elements.is_empty() {
            return Ok(vec![]);
        }

        let element_count = elements.len();
        let mut last_page: Option<u32> = None;
        let multipage = opts.multipage_sections;

        let pre_chunks = pre_chunk(elements, &opts, |element| {
            let page = element.metadata.page_number;
            let page_changed = !multipage && last_page.is_some() && page != last_page;
            if page.is_some() {
                last_page = page;
            }
            element.category == ElementCategory::Title || page_changed
        });
        let section_count = pre_chunks.len();
        let pre_chunks = combine_small_sections(pre_chunks, &opts);
        let chunks = build_chunks(pre_chunks, &opts);

        debug!(
            "Title chunking {} elements in {} sections into {} chunks",
            element_count,
            section_count,
            chunks.len()
        );
        Ok(chunks)
    }
}
