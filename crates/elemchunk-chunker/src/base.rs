//! Pre-chunking machinery shared by the built-in strategies.
//!
//! Chunking runs in two passes. Elements are first grouped into pre-chunks
//! (runs of text elements that fit together, or a single table), then each
//! pre-chunk is rendered into one or more output elements.

use elemchunk_core::{ChunkError, ChunkOptions, Element, ElementCategory, ElementMetadata};

/// Hard maximum chunk length used when `max_characters` is not given.
pub const DEFAULT_MAX_CHARACTERS: usize = 500;

/// Separator placed between element texts inside a chunk.
const TEXT_SEPARATOR: &str = "\n\n";
const SEPARATOR_LEN: usize = 2;

/// Resolved options of the built-in strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingOptions {
    /// Hard maximum chunk length in characters
    pub max_characters: usize,
    /// Soft maximum; a pre-chunk is closed once it reaches this length
    pub new_after_n_chars: usize,
    /// Overlap applied when splitting oversized chunks
    pub overlap: usize,
    /// Also overlap ordinary chunks
    pub overlap_all: bool,
    /// Record source elements on each chunk
    pub include_orig_elements: bool,
    /// Combine consecutive sections shorter than this
    pub combine_text_under_n_chars: usize,
    /// Allow sections to span pages
    pub multipage_sections: bool,
}

impl ChunkingOptions {
    /// Resolve the options read by the `basic` strategy.
    pub fn basic(options: &ChunkOptions) -> Result<Self, ChunkError> {
        let max_characters = options
            .max_characters()?
            .unwrap_or(DEFAULT_MAX_CHARACTERS);
        if max_characters == 0 {
            return Err(ChunkError::InvalidConfig(
                "'max_characters' argument must be > 0, got 0".to_string(),
            ));
        }

        let new_after_n_chars = options
            .get_usize("new_after_n_chars")?
            .unwrap_or(max_characters)
            .min(max_characters);

        let overlap = options.get_usize("overlap")?.unwrap_or(0);
        if overlap >= max_characters {
            return Err(ChunkError::InvalidConfig(format!(
                "'overlap' argument must be less than `max_characters`, got {overlap} >= {max_characters}"
            )));
        }

        Ok(Self {
            max_characters,
            new_after_n_chars,
            overlap,
            overlap_all: options.get_bool("overlap_all")?.unwrap_or(false),
            include_orig_elements: options.get_bool("include_orig_elements")?.unwrap_or(true),
            combine_text_under_n_chars: 0,
            multipage_sections: true,
        })
    }

    /// Resolve the options read by the `by_title` strategy.
    pub fn by_title(options: &ChunkOptions) -> Result<Self, ChunkError> {
        let mut opts = Self::basic(options)?;

        let combine = options
            .get_usize("combine_text_under_n_chars")?
            .unwrap_or(opts.max_characters);
        if combine > opts.max_characters {
            return Err(ChunkError::InvalidConfig(format!(
                "'combine_text_under_n_chars' argument must not exceed `max_characters` value, got {combine} > {}",
                opts.max_characters
            )));
        }
        opts.combine_text_under_n_chars = combine;
        opts.multipage_sections = options.get_bool("multipage_sections")?.unwrap_or(true);

        Ok(opts)
    }
}

// ============================================================================
// Pre-chunking
// ============================================================================

/// A group of elements destined for the same chunk(s).
#[derive(Debug)]
pub(crate) enum PreChunk {
    /// Consecutive non-table elements
    Text(Vec<Element>),
    /// A table, always on its own
    Table(Element),
}

/// Length of the joined text of `elements`.
fn joined_len(elements: &[Element]) -> usize {
    let chars: usize = elements.iter().map(Element::char_len).sum();
    chars + SEPARATOR_LEN * elements.len().saturating_sub(1)
}

fn joined_text(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(TEXT_SEPARATOR)
}

/// Group `elements` into pre-chunks.
///
/// `starts_section` is called for every non-empty element in order; when it
/// returns true the element opens a new pre-chunk.
pub(crate) fn pre_chunk<F>(
    elements: Vec<Element>,
    opts: &ChunkingOptions,
    mut starts_section: F,
) -> Vec<PreChunk>
where
    F: FnMut(&Element) -> bool,
{
    let mut pre_chunks = Vec::new();
    let mut current: Vec<Element> = Vec::new();
    let mut current_len = 0;

    let flush = |current: &mut Vec<Element>, current_len: &mut usize, out: &mut Vec<PreChunk>| {
        if !current.is_empty() {
            out.push(PreChunk::Text(std::mem::take(current)));
        }
        *current_len = 0;
    };

    for element in elements {
        if element.text.trim().is_empty() {
            continue;
        }

        if starts_section(&element) {
            flush(&mut current, &mut current_len, &mut pre_chunks);
        }

        if element.is_table() {
            flush(&mut current, &mut current_len, &mut pre_chunks);
            pre_chunks.push(PreChunk::Table(element));
            continue;
        }

        let len = element.char_len();
        if !current.is_empty()
            && (current_len >= opts.new_after_n_chars
                || current_len + SEPARATOR_LEN + len > opts.max_characters)
        {
            flush(&mut current, &mut current_len, &mut pre_chunks);
        }

        current_len += if current.is_empty() { len } else { SEPARATOR_LEN + len };
        current.push(element);
    }
    flush(&mut current, &mut current_len, &mut pre_chunks);

    pre_chunks
}

/// Merge consecutive small text pre-chunks.
///
/// A text pre-chunk absorbs the next one while its own text is shorter than
/// `combine_text_under_n_chars` and the merged text still fits the hard
/// maximum. Tables are never merged.
pub(crate) fn combine_small_sections(
    pre_chunks: Vec<PreChunk>,
    opts: &ChunkingOptions,
) -> Vec<PreChunk> {
    let mut out = Vec::with_capacity(pre_chunks.len());
    let mut pending: Option<Vec<Element>> = None;

    for pre_chunk in pre_chunks {
        match pre_chunk {
            PreChunk::Table(table) => {
                if let Some(text) = pending.take() {
                    out.push(PreChunk::Text(text));
                }
                out.push(PreChunk::Table(table));
            }
            PreChunk::Text(next) => {
                let absorb = pending
                    .as_deref()
                    .is_some_and(|prev| can_absorb(prev, &next, opts));
                if absorb {
                    if let Some(prev) = pending.as_mut() {
                        prev.extend(next);
                    }
                } else if let Some(text) = pending.replace(next) {
                    out.push(PreChunk::Text(text));
                }
            }
        }
    }
    if let Some(text) = pending {
        out.push(PreChunk::Text(text));
    }

    out
}

fn can_absorb(prev: &[Element], next: &[Element], opts: &ChunkingOptions) -> bool {
    let prev_len = joined_len(prev);
    prev_len < opts.combine_text_under_n_chars
        && prev_len + SEPARATOR_LEN + joined_len(next) <= opts.max_characters
}

// ============================================================================
// Rendering
// ============================================================================

/// Render pre-chunks into output elements.
pub(crate) fn build_chunks(pre_chunks: Vec<PreChunk>, opts: &ChunkingOptions) -> Vec<Element> {
    let mut chunks = Vec::new();
    let mut overlap_tail: Option<String> = None;

    for pre_chunk in pre_chunks {
        match pre_chunk {
            PreChunk::Text(elements) => {
                let body = joined_text(&elements);
                let text = match overlap_tail.take() {
                    Some(tail) if opts.overlap_all && !tail.is_empty() => format!("{tail} {body}"),
                    _ => body.clone(),
                };
                if opts.overlap_all && opts.overlap > 0 {
                    overlap_tail = Some(tail_chars(&body, opts.overlap));
                }

                let metadata = consolidate_metadata(&elements, opts.include_orig_elements);
                push_pieces(
                    &mut chunks,
                    &text,
                    ElementCategory::CompositeElement,
                    &metadata,
                    opts,
                );
            }
            PreChunk::Table(table) => {
                // Tables neither receive nor contribute overlap.
                overlap_tail = None;
                let metadata =
                    consolidate_metadata(std::slice::from_ref(&table), opts.include_orig_elements);

                if table.char_len() <= opts.max_characters {
                    chunks.push(Element::new(table.category, table.text).with_metadata(metadata));
                } else {
                    push_pieces(
                        &mut chunks,
                        &table.text,
                        ElementCategory::TableChunk,
                        &metadata,
                        opts,
                    );
                }
            }
        }
    }

    chunks
}

fn push_pieces(
    chunks: &mut Vec<Element>,
    text: &str,
    category: ElementCategory,
    metadata: &ElementMetadata,
    opts: &ChunkingOptions,
) {
    for (i, piece) in split_text(text, opts.max_characters, opts.overlap)
        .into_iter()
        .enumerate()
    {
        let mut metadata = metadata.clone();
        if i > 0 {
            metadata.is_continuation = Some(true);
        }
        chunks.push(Element::new(category, piece).with_metadata(metadata));
    }
}

/// Metadata of a chunk formed from `elements`.
fn consolidate_metadata(elements: &[Element], include_orig_elements: bool) -> ElementMetadata {
    let first = elements.first().map(|e| &e.metadata);

    let mut languages: Vec<String> = Vec::new();
    for language in elements
        .iter()
        .filter_map(|e| e.metadata.languages.as_ref())
        .flatten()
    {
        if !languages.contains(language) {
            languages.push(language.clone());
        }
    }

    ElementMetadata {
        filename: first.and_then(|m| m.filename.clone()),
        page_number: first.and_then(|m| m.page_number),
        languages: (!languages.is_empty()).then_some(languages),
        is_continuation: None,
        orig_elements: include_orig_elements.then(|| elements.to_vec()),
    }
}

/// Last `n` characters of `text`, leading whitespace removed.
fn tail_chars(text: &str, n: usize) -> String {
    let total = text.chars().count();
    text.chars()
        .skip(total.saturating_sub(n))
        .collect::<String>()
        .trim_start()
        .to_string()
}

/// Split `text` into pieces of at most `max_characters` characters.
///
/// Splits prefer a newline, then a space, inside the window; otherwise the
/// text is cut at the limit. Each piece after the first starts `overlap`
/// characters before the end of the previous one. `overlap` must be less
/// than `max_characters`.
pub(crate) fn split_text(text: &str, max_characters: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let mut pieces = Vec::new();
    let mut start = 0;

    loop {
        while start < total && chars[start].is_whitespace() {
            start += 1;
        }
        if start >= total {
            break;
        }

        if total - start <= max_characters {
            pieces.push(collect_trimmed(&chars[start..]));
            break;
        }

        let split_at = find_split_point(&chars, start, max_characters, overlap);
        pieces.push(collect_trimmed(&chars[start..split_at]));
        start = split_at - overlap;
    }

    pieces
}

/// Index at which the piece starting at `start` ends (exclusive).
///
/// Always greater than `start + overlap`, so every piece makes progress.
fn find_split_point(chars: &[char], start: usize, max_characters: usize, overlap: usize) -> usize {
    let window_end = start + max_characters;
    let lower = start + overlap + 1;

    for separator in ['\n', ' '] {
        if let Some(pos) = (lower..=window_end).rev().find(|&i| chars[i] == separator) {
            return pos;
        }
    }

    window_end
}

fn collect_trimmed(chars: &[char]) -> String {
    chars.iter().collect::<String>().trim_end().to_string()
}
