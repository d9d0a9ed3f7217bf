//! # elemchunk-core
//!
//! Core types and traits for elemchunk, a pluggable chunking-strategy
//! dispatcher for extracted document elements.
//!
//! This crate provides the foundational abstractions used by the rest of the
//! workspace:
//!
//! - **Elements**: [`Element`] is the unit of content flowing in and out of chunkers
//! - **Options**: [`ChunkOptions`] is the keyword option bag handed to chunkers
//! - **Chunking**: [`Chunker`] trait for grouping elements into chunks
//! - **Errors**: [`ChunkError`] for chunking and dispatch, [`Error`] for everything else
//!
//! ## Architecture
//!
//! ```text
//! Elements + strategy name + options
//!        → registry lookup → option filtering → Chunker → chunks
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Element`] | A unit of document content |
//! | [`ChunkOptions`] | Named options, a superset of what any chunker reads |
//! | [`Signature`] | Parameters a chunker declares |
//! | [`FnChunker`] | Closure adapter implementing [`Chunker`] |
//!
//! ## Example
//!
//! ```rust
//! use elemchunk_core::{ChunkOptions, Chunker, Element, FnChunker, Signature};
//!
//! let chunker = FnChunker::new(
//!     "join",
//!     Signature::new(["elements", "max_characters"]),
//!     |elements: Vec<Element>, _options: &ChunkOptions| {
//!         let text: Vec<_> = elements.iter().map(|e| e.text.as_str()).collect();
//!         Ok(vec![Element::composite(text.join(" "))])
//!     },
//! );
//!
//! let chunks = chunker
//!     .chunk(vec![Element::title("A"), Element::narrative("b")], &ChunkOptions::new())
//!     .unwrap();
//! assert_eq!(chunks[0].text, "A b");
//! ```
//!
//! ## Related Crates
//!
//! - `elemchunk-chunker`: built-in strategies, strategy registry and dispatcher

pub mod error;
pub mod options;
pub mod traits;
pub mod types;

pub use error::{ChunkError, Error, Result};
pub use options::{ChunkOptions, MAX_CHARACTERS};
pub use traits::*;
pub use types::*;
