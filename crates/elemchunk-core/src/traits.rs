//! Core traits for elemchunk components.
//!
//! - [`Chunker`]: group a sequence of elements into chunks
//!
//! A chunker declares the options it accepts through a [`Signature`]. The
//! dispatcher uses that declaration to hand each chunker only the options
//! it understands.

use std::fmt;

use crate::error::ChunkError;
use crate::options::{ChunkOptions, MAX_CHARACTERS};
use crate::types::Element;

/// Name of the leading parameter of every chunker signature.
pub const ELEMENTS: &str = "elements";

// ============================================================================
// Signature
// ============================================================================

/// Declared parameter list of a chunker.
///
/// The list normally starts with [`ELEMENTS`], followed by every named
/// option the chunker reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    parameters: Vec<String>,
}

impl Signature {
    /// Create a signature from parameter names, in declaration order.
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// All declared parameter names, in declaration order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Parameter names other than [`ELEMENTS`].
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .map(String::as_str)
            .filter(|name| *name != ELEMENTS)
    }

    /// Whether the signature accepts `max_characters`.
    pub fn accepts_max_characters(&self) -> bool {
        self.option_names().any(|name| name == MAX_CHARACTERS)
    }
}

// ============================================================================
// Chunking
// ============================================================================

/// Trait for grouping elements into chunks.
///
/// Every chunker accepts `max_characters` (read with
/// [`ChunkOptions::max_characters`]); absence means the chunker's own default
/// limit.
pub trait Chunker: Send + Sync {
    /// Label used in diagnostics.
    fn name(&self) -> &str;

    /// Declared parameters, or `None` when the chunker cannot describe them.
    fn signature(&self) -> Option<Signature>;

    /// Chunk `elements`, returning a new ordered sequence.
    fn chunk(
        &self,
        elements: Vec<Element>,
        options: &ChunkOptions,
    ) -> Result<Vec<Element>, ChunkError>;
}

/// Adapts a closure to the [`Chunker`] trait.
pub struct FnChunker<F> {
    name: String,
    signature: Option<Signature>,
    func: F,
}

impl<F> FnChunker<F>
where
    F: Fn(Vec<Element>, &ChunkOptions) -> Result<Vec<Element>, ChunkError> + Send + Sync,
{
    /// Wrap `func`, declaring the parameters it accepts.
    pub fn new(name: impl Into<String>, signature: Signature, func: F) -> Self {
        Self {
            name: name.into(),
            signature: Some(signature),
            func,
        }
    }

    /// Wrap `func` without declaring any parameters.
    pub fn opaque(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            signature: None,
            func,
        }
    }
}

impl<F> Chunker for FnChunker<F>
where
    F: Fn(Vec<Element>, &ChunkOptions) -> Result<Vec<Element>, ChunkError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> Option<Signature> {
        self.signature.clone()
    }

    fn chunk(
        &self,
        elements: Vec<Element>,
        options: &ChunkOptions,
    ) -> Result<Vec<Element>, ChunkError> {
        (self.func)(elements, options)
    }
}

impl<F> fmt::Debug for FnChunker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnChunker")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
